//! Type definitions of a low-level SQL string representation.

/// A SQL string and the parameters bound to its `?` placeholders, in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SQL {
    pub sql: String,
    pub params: Vec<Param>,
}

/// A parameter for a parameterized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// A literal string
    String(String),
}

impl SQL {
    pub fn new() -> SQL {
        SQL::default()
    }

    /// Append raw SQL syntax.
    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append a backtick-quoted identifier. Embedded backticks are doubled.
    pub fn append_identifier(&mut self, identifier: &str) {
        self.sql.push('`');
        self.sql.push_str(&identifier.replace('`', "``"));
        self.sql.push('`');
    }

    /// Append a single-quoted string literal, for places where bind parameters are not allowed.
    pub fn append_string_literal(&mut self, value: &str) {
        self.sql.push('\'');
        self.sql
            .push_str(&value.replace('\\', "\\\\").replace('\'', "''"));
        self.sql.push('\'');
    }

    /// Append a `?` placeholder and record its parameter.
    pub fn append_param(&mut self, param: Param) {
        self.sql.push('?');
        self.params.push(param);
    }
}
