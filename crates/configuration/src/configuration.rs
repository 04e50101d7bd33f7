//! Configuration for the maintenance tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;

use crate::connection_settings::DatabaseConnectionSettings;
use crate::environment::{Environment, Variable};
use crate::error::ConfigurationError;
use crate::values::{PoolSettings, TableName, TableNames};

pub const SUBJECTS_TABLE_VARIABLE: &str = "SUBJECTS_TABLE";
pub const GRADES_TABLE_VARIABLE: &str = "TABLE_NAME";
pub const CATEGORIES_TABLE_VARIABLE: &str = "CATEGORIES_TABLE";
pub const MIGRATIONS_TABLE_VARIABLE: &str = "MIGRATIONS_TABLE";
pub const MAX_CONNECTIONS_VARIABLE: &str = "DB_MAX_CONNECTIONS";
pub const POOL_TIMEOUT_VARIABLE: &str = "DB_POOL_TIMEOUT";

/// Where every setting comes from, before any secret has been read.
///
/// This is the serializable description; [`make_runtime_configuration`] turns it into the
/// [`Configuration`] the tools actually use.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    pub connection_settings: DatabaseConnectionSettings,
    #[serde(default, skip_serializing_if = "TableNames::is_default")]
    pub tables: TableNames,
    #[serde(default, skip_serializing_if = "PoolSettings::is_default")]
    pub pool_settings: PoolSettings,
}

impl ParsedConfiguration {
    /// Build the configuration from environment variables, applying defaults for anything unset.
    pub fn from_environment(environment: impl Environment) -> Result<Self, ConfigurationError> {
        let connection_settings = DatabaseConnectionSettings::from_environment(&environment)?;

        let defaults = TableNames::default();
        let tables = TableNames {
            subjects: read_table_name(&environment, SUBJECTS_TABLE_VARIABLE, defaults.subjects)?,
            grades: read_table_name(&environment, GRADES_TABLE_VARIABLE, defaults.grades)?,
            categories: read_table_name(
                &environment,
                CATEGORIES_TABLE_VARIABLE,
                defaults.categories,
            )?,
            migrations: read_table_name(
                &environment,
                MIGRATIONS_TABLE_VARIABLE,
                defaults.migrations,
            )?,
        };

        let defaults = PoolSettings::default();
        let pool_settings = PoolSettings {
            max_connections: read_number(
                &environment,
                MAX_CONNECTIONS_VARIABLE,
                defaults.max_connections,
            )?,
            pool_timeout: read_number(&environment, POOL_TIMEOUT_VARIABLE, defaults.pool_timeout)?,
        };

        Ok(Self {
            connection_settings,
            tables,
            pool_settings,
        })
    }
}

/// Everything the tools need at runtime, with all secrets resolved.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub connect_options: MySqlConnectOptions,
    pub tables: TableNames,
    pub pool_settings: PoolSettings,
}

pub fn make_runtime_configuration(
    parsed: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, ConfigurationError> {
    let connect_options = parsed.connection_settings.connect_options(&environment)?;
    Ok(Configuration {
        connect_options,
        tables: parsed.tables,
        pool_settings: parsed.pool_settings,
    })
}

fn read_table_name(
    environment: impl Environment,
    variable: &str,
    default: TableName,
) -> Result<TableName, ConfigurationError> {
    match environment.read_optional(&Variable::from(variable))? {
        Some(name) => TableName::new(name.trim()),
        None => Ok(default),
    }
}

fn read_number<T: std::str::FromStr>(
    environment: impl Environment,
    variable: &str,
    default: T,
) -> Result<T, ConfigurationError> {
    let variable = Variable::from(variable);
    match environment.read_optional(&variable)? {
        Some(value) => {
            let parsed = value.trim().parse::<T>().ok();
            parsed.ok_or(ConfigurationError::InvalidValue {
                variable,
                value,
                expected: "a non-negative integer",
            })
        }
        None => Ok(default),
    }
}
