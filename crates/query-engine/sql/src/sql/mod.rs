//! Construct and manipulate SQL.

pub mod ast;
pub mod convert;
pub mod helpers;
pub mod string;
