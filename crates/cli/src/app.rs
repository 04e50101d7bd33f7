//! What every binary does before and after its own work.

use std::process::ExitCode;

use gradebook_configuration::ConfigurationArgs;
use query_engine_execution::{create_state, State};

/// Install the logger. `tracing` events reach it through the `log` feature.
pub fn init_logging() {
    env_logger::init();
}

/// Load the configuration and open the connection pool.
pub async fn connect(args: &ConfigurationArgs) -> anyhow::Result<State> {
    let configuration = gradebook_configuration::load(args)?;
    tracing::info!(
        subjects = %configuration.tables.subjects,
        grades = %configuration.tables.grades,
        categories = %configuration.tables.categories,
        "configuration loaded"
    );
    let state = create_state(&configuration).await?;
    Ok(state)
}

/// Report an escaped error on stderr and turn the result into an exit code.
pub fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
