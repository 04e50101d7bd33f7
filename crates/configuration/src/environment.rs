//! Access to environment variables.
//!
//! Configuration never reads `std::env` directly; it goes through [`Environment`] so that tests
//! can supply a `HashMap` instead of mutating the process environment.

use std::collections::HashMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The name of an environment variable.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, JsonSchema,
)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Variable {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Variable {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Variable(name) = self;
        write!(f, "{name}")
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("the environment variable {0} is not set")]
    VariableNotPresent(Variable),
    #[error("the environment variable {0} does not contain valid unicode")]
    NonUnicodeValue(Variable),
}

/// A source of environment variables.
pub trait Environment {
    fn read(&self, variable: &Variable) -> Result<String, Error>;

    /// Like `read`, but an unset variable is `None` rather than an error.
    fn read_optional(&self, variable: &Variable) -> Result<Option<String>, Error> {
        match self.read(variable) {
            Ok(value) => Ok(Some(value)),
            Err(Error::VariableNotPresent(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl<T: Environment + ?Sized> Environment for &T {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        (**self).read(variable)
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        std::env::var(variable.as_str()).map_err(|err| match err {
            std::env::VarError::NotPresent => Error::VariableNotPresent(variable.clone()),
            std::env::VarError::NotUnicode(_) => Error::NonUnicodeValue(variable.clone()),
        })
    }
}

/// An environment with no variables at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEnvironment;

impl Environment for EmptyEnvironment {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        Err(Error::VariableNotPresent(variable.clone()))
    }
}

impl Environment for HashMap<Variable, String> {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        self.get(variable)
            .cloned()
            .ok_or_else(|| Error::VariableNotPresent(variable.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_map_reads_present_variables() {
        let environment: HashMap<Variable, String> =
            HashMap::from([("DB_HOST".into(), "db.internal".to_string())]);

        assert_eq!(
            environment.read(&"DB_HOST".into()).unwrap(),
            "db.internal".to_string()
        );
    }

    #[test]
    fn read_optional_treats_missing_variables_as_none() {
        let value = EmptyEnvironment.read_optional(&"DB_HOST".into()).unwrap();

        assert_eq!(value, None);
    }

    #[test]
    fn missing_variable_error_names_the_variable() {
        let err = EmptyEnvironment.read(&"DB_USER".into()).unwrap_err();

        insta::assert_snapshot!(err.to_string(), @"the environment variable DB_USER is not set");
    }
}
