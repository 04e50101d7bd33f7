//! Transient state used by the tools.
//!
//! This is initialized on startup and closed before exiting.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use thiserror::Error;
use tracing::{info_span, Instrument};

use gradebook_configuration::{Configuration, TableNames};

/// A connection pool and the tables to operate on.
#[derive(Debug, Clone)]
pub struct State {
    pub pool: MySqlPool,
    pub tables: TableNames,
}

impl State {
    /// Close every connection in the pool.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// Create a connection pool and wrap it inside a State.
pub async fn create_state(configuration: &Configuration) -> Result<State, InitializationError> {
    let pool = async {
        MySqlPoolOptions::new()
            .max_connections(configuration.pool_settings.max_connections)
            .acquire_timeout(Duration::from_secs(configuration.pool_settings.pool_timeout))
            .connect_with(configuration.connect_options.clone())
            .await
            .map_err(InitializationError::UnableToCreatePool)
    }
    .instrument(info_span!("Create connection pool"))
    .await?;

    Ok(State {
        pool,
        tables: configuration.tables.clone(),
    })
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("unable to initialize connection pool: {0}")]
    UnableToCreatePool(sqlx::Error),
}
