//! SQL AST for the statements the gradebook tools issue, and its rendering to MySQL text.

pub mod sql;
