//! Metadata information regarding the gradebook tables and their rows.

pub mod database;
pub mod rows;

// re-export without modules
pub use database::*;
pub use rows::*;
