//! freight-quote - air-freight quotation tool
//!
//! Prices shipment files against per-destination tiered rates

#![allow(missing_docs)]

use clap::Parser;
use freight_calc::cli::{Cli, execute, load_config};
use freight_calc::utils::logging::init_logging;
use std::process::ExitCode;
use tracing::debug;

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli).await?;
    init_logging(config.logging())?;

    let build = freight_calc::build_info();
    debug!(
        "{} {} ({}, {})",
        freight_calc::NAME,
        build.version,
        build.git_hash,
        build.rust_version
    );

    let mut stdout = std::io::stdout().lock();
    execute(&cli.command, &config, &mut stdout).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print the whole context chain using Display (not Debug)
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
