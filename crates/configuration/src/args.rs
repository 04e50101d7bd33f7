use std::path::PathBuf;

use crate::env_file::DEFAULT_ENV_FILE;

/// Command-line options shared by every tool. All of them are optional.
#[derive(Debug, Clone, clap::Args)]
pub struct ConfigurationArgs {
    /// File of environment variables loaded before the configuration is read.
    #[arg(long, env = "GRADEBOOK_ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,
}
