//! Errors that can be thrown when executing statements.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("migration {version} failed: {source}")]
    Migration {
        version: String,
        #[source]
        source: Box<Error>,
    },
}
