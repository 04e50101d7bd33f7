//! Execution of the gradebook statements against a MySQL database.

pub mod crud;
pub mod dump;
pub mod error;
pub mod migrations;
pub mod query;
pub mod schema;
pub mod seed;
pub mod state;

pub use error::Error;
pub use state::{create_state, InitializationError, State};
