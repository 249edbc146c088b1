//! Form-field map export for the PDF-filling service

use std::path::Path;

use anyhow::{Context, Result};
use lekha_core::{form_fields, Classifier, TaxEngine};

use super::{load_config, read_input};

pub fn cmd_fields(config: Option<&Path>, file: &Path, output: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let text = read_input(file)?;

    let classifier = Classifier::new()?;
    let record = classifier.classify(&text);
    let engine = TaxEngine::new(&config);
    let (old, new) = engine.assess_both(&record)?;

    let fields = form_fields(&record, &old, &new);
    let json = serde_json::to_string_pretty(&fields)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {} form fields to {}", fields.len(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
