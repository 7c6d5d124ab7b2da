//! Atelier command-line entry point.

use atelier::cli::{Cli, load_config, run};
use atelier_core::observability::init_tracing;
use atelier_error::AtelierError;
use atelier_pipeline::HttpOrchestrator;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.log_format.into()) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {:#}", e);
            if e
                .downcast_ref::<AtelierError>()
                .is_some_and(AtelierError::is_policy)
            {
                eprintln!("The provider rejected this request on content-policy grounds; reword it and try again.");
            }
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let orchestrator = HttpOrchestrator::from_config(config)?;
    run(&orchestrator, cli.command, cli.output.as_deref()).await
}
