use std::process::ExitCode;

use clap::Parser;

use gradebook_cli::{app, report};
use gradebook_configuration::ConfigurationArgs;
use query_engine_execution::migrations::{self, MigrationReport, MIGRATIONS};

/// Bring the grades table up to date: add the `Category` column and its index.
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

    println!("{}", report::migrate::render_header());
    match run(&args).await {
        Ok(migration_report) => {
            println!("{}", report::migrate::render(&migration_report));
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("{}", report::migrate::render_failure(&error));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<MigrationReport> {
    let state = app::connect(&args.configuration).await?;
    let result = migrations::run_migrations(&state, MIGRATIONS).await;
    state.close().await;
    Ok(result?)
}
