//! Data Insights - CSV Descriptive Statistics Report
//!
//! Reads a CSV file and writes a plain-text summary report.

use anyhow::Context;
use clap::Parser;
use data_insights::cli::Cli;
use data_insights::logging::init_logging;
use data_insights::run;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity.tracing_level_filter()).context("failed to initialize logging")?;

    let config = cli.config();
    run(&config, &mut std::io::stdout())
        .with_context(|| format!("failed to build report from {}", config.input.display()))?;

    Ok(())
}
