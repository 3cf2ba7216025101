//! Tris - two-player tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tris::Cli;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let _cli = Cli::parse();

    // Diagnostics go to stderr so they never mix with the board on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    info!("Starting tris");

    let status = tris::run(std::io::stdin().lock(), std::io::stdout().lock())?;

    info!(?status, "Session ended");
    Ok(())
}
