//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `assess` - Tax assessment command (classify + compute)
//! - `extract` - Classification-only command
//! - `fields` - Form-field map export for the PDF filler
//! - `slabs` - Config inspection command

pub mod assess;
pub mod extract;
pub mod fields;
pub mod slabs;

// Re-export command functions for main.rs
pub use assess::*;
pub use extract::*;
pub use fields::*;
pub use slabs::*;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use lekha_core::{Money, TaxConfig};
use tracing::debug;

/// Load the regime config from an explicit path, or the embedded defaults
pub fn load_config(path: Option<&Path>) -> Result<TaxConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Using regime config override");
            TaxConfig::from_path(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))
        }
        None => TaxConfig::load_default().context("Embedded regime config is invalid"),
    }
}

/// Read OCR text from a file, or stdin when the path is "-"
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        debug!(bytes = text.len(), "Read OCR text from stdin");
        Ok(text)
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        debug!(path = %path.display(), bytes = text.len(), "Read OCR text");
        Ok(text)
    }
}

/// Format an amount in Indian digit grouping: `1,00,000.00`.
///
/// Last three integer digits form one group, the rest group in twos.
/// Display-only; all arithmetic stays in paise.
pub fn format_inr(amount: Money) -> String {
    let paise = amount.paise();
    let sign = if paise < 0 { "-" } else { "" };
    let abs = paise.abs();
    let int = (abs / 100).to_string();

    let grouped = if int.len() > 3 {
        let (head, tail) = int.split_at(int.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    } else {
        int
    };

    format!("{}{}.{:02}", sign, grouped, abs % 100)
}

/// Render a basis-point rate as a percentage
pub fn format_rate(bps: u32) -> String {
    if bps % 100 == 0 {
        format!("{}%", bps / 100)
    } else {
        format!("{}.{:02}%", bps / 100, bps % 100)
    }
}
