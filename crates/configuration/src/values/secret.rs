use std::borrow::Cow;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::environment::{self, Environment, Variable};

/// A value that is either given inline or read from an environment variable when the
/// configuration is turned into its runtime form.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Secret {
    Plain(String),
    FromEnvironment { variable: Variable },
}

impl Secret {
    pub fn from_environment(variable: impl Into<Variable>) -> Self {
        Self::FromEnvironment {
            variable: variable.into(),
        }
    }

    pub fn resolve(
        &self,
        environment: impl Environment,
    ) -> Result<Cow<'_, str>, environment::Error> {
        match self {
            Secret::Plain(value) => Ok(Cow::Borrowed(value)),
            Secret::FromEnvironment { variable } => Ok(Cow::Owned(environment.read(variable)?)),
        }
    }
}

// Plain values may be passwords, so they stay out of logs.
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Secret::Plain(_) => f.write_str("Plain(<redacted>)"),
            Secret::FromEnvironment { variable } => f
                .debug_struct("FromEnvironment")
                .field("variable", variable)
                .finish(),
        }
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::environment::EmptyEnvironment;

    #[test]
    fn resolves_from_environment() {
        let environment: HashMap<Variable, String> =
            HashMap::from([("DB_PASSWORD".into(), "hunter2".to_string())]);
        let secret = Secret::from_environment("DB_PASSWORD");

        assert_eq!(secret.resolve(&environment).unwrap(), "hunter2");
    }

    #[test]
    fn plain_values_ignore_the_environment() {
        let secret = Secret::from("inline");

        assert_eq!(secret.resolve(EmptyEnvironment).unwrap(), "inline");
    }

    #[test]
    fn debug_output_redacts_plain_values() {
        let secret = Secret::from("hunter2");

        assert_eq!(format!("{secret:?}"), "Plain(<redacted>)");
    }

    #[test]
    fn deserializes_both_shapes() {
        let plain: Secret = serde_json::from_str(r#""mysql://localhost/db""#).unwrap();
        let from_env: Secret = serde_json::from_str(r#"{"variable": "DATABASE_URL"}"#).unwrap();

        assert_eq!(plain, Secret::from("mysql://localhost/db"));
        assert_eq!(from_env, Secret::from_environment("DATABASE_URL"));
    }
}
