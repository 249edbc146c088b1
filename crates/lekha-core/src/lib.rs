//! Lekha Core Library
//!
//! Shared functionality for the Lekha tax preparation tool:
//! - Pattern-based classifier turning OCR text into a financial record
//! - Regime configuration: slab tables and deduction caps as data
//! - Tax computation engine with exact integer-paise slab arithmetic
//! - Deduction headroom suggestions
//! - Flat form-field export for the PDF-filling service

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod money;

pub use classify::Classifier;
pub use config::{RegimeRules, Slab, TaxConfig};
pub use engine::TaxEngine;
pub use error::{Error, Result};
pub use export::form_fields;
pub use models::{
    DeductionLine, DeductionSuggestion, FinancialRecord, Regime, Section, SlabContribution,
    TaxResult,
};
pub use money::Money;
