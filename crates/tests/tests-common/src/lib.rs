//! Helpers shared by the database-backed test suites.

pub mod database;
