//! Regime configuration: slab tables and deduction caps
//!
//! Slab boundaries, marginal rates, and the four statutory section caps are
//! data, not code — they change every financial year. Config is loaded with
//! a two-layer resolution:
//! 1. An explicit path supplied by the caller (e.g. `--config`)
//! 2. Embedded defaults compiled into the binary (FY 2023-24 values)
//!
//! A malformed table (gap, overlap, bounded top slab) is a configuration
//! defect and fails loudly at load time; it is never absorbed into a result.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Regime, Section};
use crate::money::Money;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/regimes.toml");

/// Largest rupee amount accepted from config. No statutory bound or cap
/// comes near this; anything above it is a typo, and it keeps the derived
/// paise values well inside `i64`.
const MAX_CONFIG_RUPEES: u64 = 1_000_000_000_000;

/// One income slab taxed at a single marginal rate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slab {
    pub lower: Money,
    /// `None` for the unbounded top slab
    pub upper: Option<Money>,
    /// Marginal rate in basis points
    pub rate_bps: u32,
}

/// The rule set for one regime: its slab table and whether section-wise
/// deductions reduce taxable income under it
#[derive(Debug, Clone)]
pub struct RegimeRules {
    pub slabs: Vec<Slab>,
    pub allows_deductions: bool,
}

/// Loaded and validated tax configuration
#[derive(Debug, Clone)]
pub struct TaxConfig {
    old: RegimeRules,
    new: RegimeRules,
    caps: [(Section, Money); 4],
}

impl TaxConfig {
    /// Load the embedded default configuration
    pub fn load_default() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Load configuration from an explicit TOML file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        debug!(path = %path.display(), "Loaded regime config");
        Ok(config)
    }

    /// Parse and validate a TOML config string
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: RawConfig = toml::from_str(raw)?;

        let old = build_rules("old_regime", &file.old_regime)?;
        let new = build_rules("new_regime", &file.new_regime)?;

        let caps = [
            (
                Section::S80C,
                config_amount("deduction_caps.section_80c", file.deduction_caps.section_80c)?,
            ),
            (
                Section::S80D,
                config_amount("deduction_caps.section_80d", file.deduction_caps.section_80d)?,
            ),
            (
                Section::S80E,
                config_amount("deduction_caps.section_80e", file.deduction_caps.section_80e)?,
            ),
            (
                Section::S80G,
                config_amount("deduction_caps.section_80g", file.deduction_caps.section_80g)?,
            ),
        ];

        Ok(Self { old, new, caps })
    }

    /// The rule set for a regime
    pub fn rules(&self, regime: Regime) -> &RegimeRules {
        match regime {
            Regime::Old => &self.old,
            Regime::New => &self.new,
        }
    }

    /// Statutory cap for a deduction section
    pub fn cap(&self, section: Section) -> Money {
        self.caps
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, cap)| *cap)
            .unwrap_or(Money::ZERO)
    }
}

/// Build and validate a slab table from its raw config form.
///
/// Lower bounds are derived from the previous slab's upper bound, so the
/// table is contiguous by construction; validation checks ordering and that
/// exactly the final slab is unbounded.
fn build_rules(name: &str, raw: &RawRegime) -> Result<RegimeRules> {
    if raw.slabs.is_empty() {
        return Err(Error::Config(format!("{}: slab table is empty", name)));
    }

    let mut slabs = Vec::with_capacity(raw.slabs.len());
    let mut lower = Money::ZERO;

    for (i, slab) in raw.slabs.iter().enumerate() {
        let last = i == raw.slabs.len() - 1;

        if slab.rate_bps > 10_000 {
            return Err(Error::Config(format!(
                "{}: slab {} rate {} bps exceeds 100%",
                name, i, slab.rate_bps
            )));
        }

        let upper = match (slab.up_to, last) {
            (Some(rupees), false) => {
                let upper = config_amount(&format!("{}: slab {}", name, i), rupees)?;
                if upper <= lower {
                    return Err(Error::Config(format!(
                        "{}: slab {} upper bound {} does not exceed lower bound {}",
                        name, i, upper, lower
                    )));
                }
                Some(upper)
            }
            (None, true) => None,
            (Some(_), true) => {
                return Err(Error::Config(format!(
                    "{}: final slab must be unbounded (omit up_to)",
                    name
                )));
            }
            (None, false) => {
                return Err(Error::Config(format!(
                    "{}: slab {} is unbounded but not the final slab",
                    name, i
                )));
            }
        };

        slabs.push(Slab {
            lower,
            upper,
            rate_bps: slab.rate_bps,
        });
        if let Some(upper) = upper {
            lower = upper;
        }
    }

    Ok(RegimeRules {
        slabs,
        allows_deductions: raw.allows_deductions,
    })
}

/// Convert a raw config amount to `Money`, rejecting values too large to
/// be statutory (and too large to hold in paise).
fn config_amount(context: &str, rupees: u64) -> Result<Money> {
    if rupees > MAX_CONFIG_RUPEES {
        return Err(Error::Config(format!(
            "{}: amount {} exceeds the supported maximum of {}",
            context, rupees, MAX_CONFIG_RUPEES
        )));
    }
    Ok(Money::from_rupees(rupees as i64))
}

// Raw serde mirror of the TOML file

#[derive(Debug, Deserialize)]
struct RawConfig {
    old_regime: RawRegime,
    new_regime: RawRegime,
    deduction_caps: RawCaps,
}

#[derive(Debug, Deserialize)]
struct RawRegime {
    allows_deductions: bool,
    slabs: Vec<RawSlab>,
}

#[derive(Debug, Deserialize)]
struct RawSlab {
    up_to: Option<u64>,
    rate_bps: u32,
}

#[derive(Debug, Deserialize)]
struct RawCaps {
    section_80c: u64,
    section_80d: u64,
    section_80e: u64,
    section_80g: u64,
}
