use std::process::ExitCode;

use clap::Parser;

use gradebook_cli::{app, report};
use gradebook_configuration::ConfigurationArgs;
use query_engine_execution::dump;

/// Print the categories and assignments in the database. Never writes.
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
    let result = dump::collect(&state).await;
    state.close().await;

    println!("{}", report::dump::render(&result?));
    Ok(())
}
