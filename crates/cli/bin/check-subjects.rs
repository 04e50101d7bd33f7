use std::process::ExitCode;

use clap::Parser;

use gradebook_cli::{app, report};
use gradebook_configuration::ConfigurationArgs;
use query_engine_execution::{crud, seed, State};
use query_engine_metadata::metadata::REFERENCE_SUBJECTS;

/// Make sure the reference subjects exist, adding any that are missing.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    #[command(flatten)]
    configuration: ConfigurationArgs,
}

#[tokio::main]
pub async fn main() -> ExitCode {
    app::init_logging();
    let args = Args::parse();
    app::exit_code(run(&args).await)
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let state = app::connect(&args.configuration).await?;
    let result = check_subjects(&state).await;
    state.close().await;
    result
}

async fn check_subjects(state: &State) -> anyhow::Result<()> {
    println!("{}", report::seed::INITIALIZING);
    crud::init_db(state).await?;

    let seeded = seed::ensure_subjects(state, &REFERENCE_SUBJECTS).await?;
    println!("{}", report::seed::render(&seeded));
    Ok(())
}
