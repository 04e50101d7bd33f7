//! Translate each tool operation into the SQL statement that performs it.

pub mod migrations;
pub mod queries;
pub mod schema;
