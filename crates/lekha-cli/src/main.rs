//! Lekha CLI - Scanned tax document reader and tax calculator
//!
//! Usage:
//!   lekha extract --file ocr.txt        Classify OCR text into a record
//!   lekha assess --file ocr.txt         Compute liability under both regimes
//!   lekha fields --file ocr.txt         Emit the form-field map as JSON
//!   lekha slabs                         Show configured slab tables

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Extract { file, json } => commands::cmd_extract(&file, json),
        Commands::Assess { file, regime, json } => {
            commands::cmd_assess(config, &file, &regime, json)
        }
        Commands::Fields { file, output } => {
            commands::cmd_fields(config, &file, output.as_deref())
        }
        Commands::Slabs { regime } => commands::cmd_slabs(config, regime.as_deref()),
    }
}
