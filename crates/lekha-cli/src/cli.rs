//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lekha - Read scanned tax documents and compute regime-wise liability
#[derive(Parser)]
#[command(name = "lekha")]
#[command(about = "OCR tax-document classifier and tax calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Regime config TOML (slab tables and deduction caps)
    ///
    /// Defaults to the embedded FY 2023-24 tables. Supply a file to apply
    /// a different year's statutory values without rebuilding.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify OCR text into a structured financial record
    Extract {
        /// Text file from the OCR service ("-" reads stdin)
        #[arg(short, long)]
        file: PathBuf,

        /// Print the record as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compute tax liability from OCR text
    Assess {
        /// Text file from the OCR service ("-" reads stdin)
        #[arg(short, long)]
        file: PathBuf,

        /// Regime to assess: old, new, or both
        #[arg(short, long, default_value = "both")]
        regime: String,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Emit the form-field map for the PDF-filling service
    Fields {
        /// Text file from the OCR service ("-" reads stdin)
        #[arg(short, long)]
        file: PathBuf,

        /// Write the JSON map here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the configured slab tables and deduction caps
    Slabs {
        /// Limit to one regime: old or new
        #[arg(short, long)]
        regime: Option<String>,
    },
}
