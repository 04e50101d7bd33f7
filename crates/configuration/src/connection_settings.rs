//! Database connection settings.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;

use crate::environment::{Environment, Variable};
use crate::error::ConfigurationError;
use crate::values::{ConnectionUri, Password, Secret};

pub const DEFAULT_CONNECTION_URI_VARIABLE: &str = "DATABASE_URL";
pub const DEFAULT_HOST_VARIABLE: &str = "DB_HOST";
pub const DEFAULT_PORT_VARIABLE: &str = "DB_PORT";
pub const DEFAULT_USER_VARIABLE: &str = "DB_USER";
pub const DEFAULT_PASSWORD_VARIABLE: &str = "DB_PASSWORD";
pub const DEFAULT_DATABASE_VARIABLE: &str = "DB_NAME";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3306;

/// Database connection settings.
///
/// Either a single connection string, or the individual parts of one.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum DatabaseConnectionSettings {
    Uri {
        /// Connection string for a MySQL-compatible database.
        uri: ConnectionUri,
    },
    Components {
        host: Secret,
        port: Secret,
        user: Secret,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password: Option<Password>,
        database: Secret,
    },
}

impl DatabaseConnectionSettings {
    /// Describe where each connection parameter comes from.
    ///
    /// `DATABASE_URL` wins when it is set. Otherwise each part is read from its own variable,
    /// with the host and port falling back to `localhost:3306` and the password being optional.
    pub fn from_environment(environment: impl Environment) -> Result<Self, ConfigurationError> {
        let uri_variable = Variable::from(DEFAULT_CONNECTION_URI_VARIABLE);
        if environment.read_optional(&uri_variable)?.is_some() {
            return Ok(Self::Uri {
                uri: ConnectionUri(Secret::FromEnvironment {
                    variable: uri_variable,
                }),
            });
        }

        let or_default = |variable: &str, default: String| -> Result<Secret, ConfigurationError> {
            let variable = Variable::from(variable);
            Ok(match environment.read_optional(&variable)? {
                Some(_) => Secret::FromEnvironment { variable },
                None => Secret::Plain(default),
            })
        };

        let password_variable = Variable::from(DEFAULT_PASSWORD_VARIABLE);
        let password = environment
            .read_optional(&password_variable)?
            .map(|_| Password(Secret::FromEnvironment {
                variable: password_variable,
            }));

        Ok(Self::Components {
            host: or_default(DEFAULT_HOST_VARIABLE, DEFAULT_HOST.to_string())?,
            port: or_default(DEFAULT_PORT_VARIABLE, DEFAULT_PORT.to_string())?,
            user: Secret::from_environment(DEFAULT_USER_VARIABLE),
            password,
            database: Secret::from_environment(DEFAULT_DATABASE_VARIABLE),
        })
    }

    /// Resolve every secret and build the options sqlx connects with.
    pub fn connect_options(
        &self,
        environment: impl Environment,
    ) -> Result<MySqlConnectOptions, ConfigurationError> {
        match self {
            DatabaseConnectionSettings::Uri {
                uri: ConnectionUri(uri),
            } => {
                let uri = uri.resolve(&environment)?;
                MySqlConnectOptions::from_str(&uri)
                    .map_err(ConfigurationError::InvalidConnectionUri)
            }
            DatabaseConnectionSettings::Components {
                host,
                port,
                user,
                password,
                database,
            } => {
                let port_value = port.resolve(&environment)?;
                let port_number = port_value.trim().parse::<u16>().map_err(|_| {
                    ConfigurationError::InvalidValue {
                        variable: match port {
                            Secret::FromEnvironment { variable } => variable.clone(),
                            Secret::Plain(_) => Variable::from(DEFAULT_PORT_VARIABLE),
                        },
                        value: port_value.to_string(),
                        expected: "a TCP port number",
                    }
                })?;

                let mut options = MySqlConnectOptions::new()
                    .host(&host.resolve(&environment)?)
                    .port(port_number)
                    .username(&user.resolve(&environment)?)
                    .database(&database.resolve(&environment)?);
                if let Some(Password(password)) = password {
                    options = options.password(&password.resolve(&environment)?);
                }
                Ok(options)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::environment::EmptyEnvironment;

    #[test]
    fn prefers_the_connection_uri() {
        let environment: HashMap<Variable, String> = HashMap::from([
            (
                DEFAULT_CONNECTION_URI_VARIABLE.into(),
                "mysql://root@localhost/gradebook".to_string(),
            ),
            (DEFAULT_HOST_VARIABLE.into(), "ignored".to_string()),
        ]);

        let settings = DatabaseConnectionSettings::from_environment(&environment).unwrap();

        similar_asserts::assert_eq!(
            settings,
            DatabaseConnectionSettings::Uri {
                uri: ConnectionUri(Secret::from_environment(DEFAULT_CONNECTION_URI_VARIABLE)),
            }
        );
        assert!(settings.connect_options(&environment).is_ok());
    }

    #[test]
    fn falls_back_to_components_with_defaults() {
        let environment: HashMap<Variable, String> = HashMap::from([
            (DEFAULT_USER_VARIABLE.into(), "grader".to_string()),
            (DEFAULT_DATABASE_VARIABLE.into(), "gradebook".to_string()),
        ]);

        let settings = DatabaseConnectionSettings::from_environment(&environment).unwrap();

        similar_asserts::assert_eq!(
            settings,
            DatabaseConnectionSettings::Components {
                host: Secret::from("localhost"),
                port: Secret::from("3306"),
                user: Secret::from_environment(DEFAULT_USER_VARIABLE),
                password: None,
                database: Secret::from_environment(DEFAULT_DATABASE_VARIABLE),
            }
        );

        assert!(settings.connect_options(&environment).is_ok());
    }

    #[test]
    fn reads_password_when_present() {
        let environment: HashMap<Variable, String> = HashMap::from([
            (DEFAULT_USER_VARIABLE.into(), "grader".to_string()),
            (DEFAULT_PASSWORD_VARIABLE.into(), "hunter2".to_string()),
            (DEFAULT_DATABASE_VARIABLE.into(), "gradebook".to_string()),
        ]);

        let settings = DatabaseConnectionSettings::from_environment(&environment).unwrap();

        assert!(matches!(
            settings,
            DatabaseConnectionSettings::Components {
                password: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn missing_user_is_reported_when_resolving() {
        let settings = DatabaseConnectionSettings::from_environment(EmptyEnvironment).unwrap();

        let err = settings.connect_options(EmptyEnvironment).unwrap_err();

        insta::assert_snapshot!(err.to_string(), @"the environment variable DB_USER is not set");
    }

    #[test]
    fn rejects_a_non_numeric_port() {
        let environment: HashMap<Variable, String> = HashMap::from([
            (DEFAULT_PORT_VARIABLE.into(), "mysql".to_string()),
            (DEFAULT_USER_VARIABLE.into(), "grader".to_string()),
            (DEFAULT_DATABASE_VARIABLE.into(), "gradebook".to_string()),
        ]);

        let settings = DatabaseConnectionSettings::from_environment(&environment).unwrap();
        let err = settings.connect_options(&environment).unwrap_err();

        insta::assert_snapshot!(
            err.to_string(),
            @r#"invalid value "mysql" in DB_PORT: expected a TCP port number"#
        );
    }
}
