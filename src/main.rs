//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use bds_pipeline::{
    cli::{Bds, Commands, QueryCmd, YearFilter},
    commands::{handle_extract, handle_load, handle_query, handle_run, handle_transform, QueryParams},
    BdsError, Config, Dataset, YearRange,
};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bds_pipeline=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn query_params(dataset: Dataset, filter: YearFilter, code: Option<i64>) -> QueryParams {
    QueryParams {
        dataset,
        range: YearRange::new(filter.from, filter.to),
        code,
        as_json: filter.json,
    }
}

/// Flag structural failures the user should retry.
fn report_failure(err: BdsError) -> anyhow::Error {
    if err.is_retryable() {
        error!(error = %err.to_string(), "run failed; re-run the pipeline");
    }
    err.into()
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let app = Bds::parse();
    let config = Config::from_env().context("resolving configuration")?;

    match app.command {
        Commands::Run => {
            handle_run(&config).await.map_err(report_failure)?;
        }
        Commands::Extract => handle_extract(&config).await.map_err(report_failure)?,
        Commands::Transform => {
            handle_transform(&config).map_err(report_failure)?;
        }
        Commands::Load => {
            handle_load(&config).map_err(report_failure)?;
        }
        Commands::Query { cmd } => {
            let params = match cmd {
                QueryCmd::National { filter } => query_params(Dataset::National, filter, None),
                QueryCmd::FirmAge { filter, fage } => {
                    query_params(Dataset::ByFirmAge, filter, fage)
                }
                QueryCmd::State { filter, state } => query_params(Dataset::ByState, filter, state),
            };
            handle_query(&config, params).context("query failed")?;
        }
    }

    Ok(())
}
