use std::path::PathBuf;

use thiserror::Error;

use crate::environment::{self, Variable};

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Environment(#[from] environment::Error),
    #[error("invalid value {value:?} in {variable}: expected {expected}")]
    InvalidValue {
        variable: Variable,
        value: String,
        expected: &'static str,
    },
    // The connection string itself is left out of the message; it usually carries a password.
    #[error("invalid database connection string: {0}")]
    InvalidConnectionUri(#[source] sqlx::Error),
    #[error("invalid table name {0:?}: only letters, digits, '_' and '$' are allowed")]
    InvalidTableName(String),
    #[error("unable to load environment file {}: {source}", path.display())]
    EnvironmentFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
