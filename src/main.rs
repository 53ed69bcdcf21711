//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use ffl_blueprint::{
    cli::{Blueprint, Commands},
    commands::{grades::handle_grades, lineup::handle_lineup, market::handle_market},
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let app = Blueprint::parse();

    match app.command {
        Commands::Lineup { common, mode } => handle_lineup(common, mode)
            .await
            .context("lineup command failed")?,

        Commands::Grades { common } => handle_grades(common)
            .await
            .context("grades command failed")?,

        Commands::Market {
            common,
            market,
            outlook,
        } => handle_market(common, &market, outlook)
            .await
            .with_context(|| format!("market command failed ({})", market.display()))?,
    }

    Ok(())
}
