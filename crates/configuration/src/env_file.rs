//! Loading variables from a local `.env` file into the process environment.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigurationError;

pub const DEFAULT_ENV_FILE: &str = ".env";

/// Load `path` into the process environment.
///
/// Variables that are already set are left alone. A missing file is not an error; the returned
/// value says whether anything was loaded.
pub fn load_env_file(path: &Path) -> Result<Option<PathBuf>, ConfigurationError> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "loaded environment file");
            Ok(Some(path.to_path_buf()))
        }
        Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no environment file found");
            Ok(None)
        }
        Err(source) => Err(ConfigurationError::EnvironmentFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}
