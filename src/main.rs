//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `check_dns` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process;

use check_dns::initialization::init_logger_with;
use check_dns::{run_check, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config; usage errors exit with code 2
    let config = Cli::parse().into_config();

    if config.no_color {
        colored::control::set_override(false);
    }

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_check(config).await {
        Ok(report) => {
            eprintln!("{}", report.summary());
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            process::exit(e.exit_code());
        }
    }
}
