use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

pub const DEFAULT_SUBJECTS_TABLE: &str = "subjects";
pub const DEFAULT_GRADES_TABLE: &str = "grades";
pub const DEFAULT_CATEGORIES_TABLE: &str = "categories";
pub const DEFAULT_MIGRATIONS_TABLE: &str = "schema_migrations";

/// A table name that is safe to splice into a statement.
///
/// Only ASCII letters, digits, `_` and `$` are accepted, at most 64 characters, which is what
/// MySQL allows for unquoted identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct TableName(String);

impl TableName {
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigurationError> {
        let name = name.into();
        let valid = !name.is_empty()
            && name.len() <= 64
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
        if valid {
            Ok(Self(name))
        } else {
            Err(ConfigurationError::InvalidTableName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TableName {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TableName> for String {
    fn from(value: TableName) -> Self {
        value.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let TableName(name) = self;
        write!(f, "{name}")
    }
}

/// The tables the tools operate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableNames {
    pub subjects: TableName,
    /// Assignments and their grades.
    pub grades: TableName,
    pub categories: TableName,
    /// The ledger of applied migrations.
    pub migrations: TableName,
}

impl TableNames {
    pub fn is_default(&self) -> bool {
        *self == TableNames::default()
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            subjects: TableName(DEFAULT_SUBJECTS_TABLE.to_string()),
            grades: TableName(DEFAULT_GRADES_TABLE.to_string()),
            categories: TableName(DEFAULT_CATEGORIES_TABLE.to_string()),
            migrations: TableName(DEFAULT_MIGRATIONS_TABLE.to_string()),
        }
    }
}
