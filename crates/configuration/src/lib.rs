pub mod args;
pub mod configuration;
pub mod connection_settings;
pub mod env_file;
pub mod environment;
pub mod error;
pub mod values;

pub use args::ConfigurationArgs;
pub use configuration::{make_runtime_configuration, Configuration, ParsedConfiguration};
pub use connection_settings::DatabaseConnectionSettings;
pub use env_file::load_env_file;
pub use error::ConfigurationError;
pub use values::{ConnectionUri, PoolSettings, Secret, TableName, TableNames};

use environment::ProcessEnvironment;

/// Load the environment file named by `args`, then build the runtime configuration from the
/// process environment.
pub fn load(args: &ConfigurationArgs) -> Result<Configuration, ConfigurationError> {
    load_env_file(&args.env_file)?;
    let parsed = ParsedConfiguration::from_environment(ProcessEnvironment)?;
    make_runtime_configuration(parsed, ProcessEnvironment)
}
