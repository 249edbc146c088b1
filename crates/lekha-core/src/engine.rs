//! Tax computation engine
//!
//! Computes liability for a `FinancialRecord` under a selected regime:
//! - Deduction aggregation: each section clamped to its statutory cap
//! - Slab walk: marginal-rate contributions in exact paise arithmetic
//! - Deduction suggestions: unused headroom ranked by potential saving
//!
//! The engine is a pure, single-pass transformation. Its only failure modes
//! are precondition violations — a negative amount in the record — which
//! indicate a caller defect, not noisy input, and are surfaced immediately.

use tracing::debug;

use crate::config::{RegimeRules, TaxConfig};
use crate::error::{Error, Result};
use crate::models::{
    DeductionLine, DeductionSuggestion, FinancialRecord, Regime, Section, SlabContribution,
    TaxResult,
};
use crate::money::Money;

/// Computes regime-specific liability from a classified record
pub struct TaxEngine<'a> {
    config: &'a TaxConfig,
}

impl<'a> TaxEngine<'a> {
    pub fn new(config: &'a TaxConfig) -> Self {
        Self { config }
    }

    /// Compute liability and suggestions under one regime
    pub fn assess(&self, record: &FinancialRecord, regime: Regime) -> Result<TaxResult> {
        validate_record(record)?;

        let rules = self.config.rules(regime);
        let gross_total_income = record.gross_total_income();

        // Sub-algorithm A: per-section clamp to cap, silent truncation.
        // Regimes that ignore section-wise deductions skip this entirely.
        let deductions = if rules.allows_deductions {
            self.eligible_deductions(record)
        } else {
            Vec::new()
        };
        let total_deductions: Money = deductions.iter().map(|d| d.eligible).sum();

        let taxable_income = gross_total_income.reduce_by(total_deductions);

        // Sub-algorithm B: slab walk
        let slabs = slab_breakdown(rules, taxable_income);
        let total_tax: Money = slabs.iter().map(|s| s.tax).sum();

        // Sub-algorithm C: headroom suggestions, old regime only
        let suggestions = if rules.allows_deductions {
            self.suggestions(record, rules, taxable_income)
        } else {
            Vec::new()
        };

        debug!(
            regime = %regime,
            gross = %gross_total_income,
            taxable = %taxable_income,
            tax = %total_tax,
            "Assessment complete"
        );

        Ok(TaxResult {
            regime,
            gross_total_income,
            exempt_income: record.exempt_income(),
            deductions,
            total_deductions,
            taxable_income,
            slabs,
            total_tax,
            suggestions,
        })
    }

    /// Compute liability under both regimes for side-by-side comparison
    pub fn assess_both(&self, record: &FinancialRecord) -> Result<(TaxResult, TaxResult)> {
        Ok((
            self.assess(record, Regime::Old)?,
            self.assess(record, Regime::New)?,
        ))
    }

    /// Clamp each declared section amount to its statutory cap
    fn eligible_deductions(&self, record: &FinancialRecord) -> Vec<DeductionLine> {
        Section::all()
            .iter()
            .map(|&section| {
                let declared = record.declared(section);
                let cap = self.config.cap(section);
                DeductionLine {
                    section,
                    declared,
                    cap,
                    eligible: declared.min(cap),
                }
            })
            .collect()
    }

    /// Suggest sections with unused headroom, ranked by potential saving.
    ///
    /// The saving estimate is headroom times the marginal rate of the slab
    /// the taxable income currently falls in. Sections at or over their cap
    /// produce no suggestion.
    fn suggestions(
        &self,
        record: &FinancialRecord,
        rules: &RegimeRules,
        taxable_income: Money,
    ) -> Vec<DeductionSuggestion> {
        let marginal = marginal_rate_bps(rules, taxable_income);

        let mut suggestions: Vec<DeductionSuggestion> = Section::all()
            .iter()
            .filter_map(|&section| {
                let declared = record.declared(section);
                let cap = self.config.cap(section);
                if declared >= cap {
                    return None;
                }
                let headroom = cap - declared;
                Some(DeductionSuggestion {
                    section,
                    declared,
                    cap,
                    headroom,
                    potential_saving: headroom.apply_bps(marginal),
                })
            })
            .collect();

        suggestions.sort_by(|a, b| b.potential_saving.cmp(&a.potential_saving));
        suggestions
    }
}

/// Walk the slab table and collect the contribution of every slab the
/// taxable income reaches.
///
/// Each portion is `max(0, min(taxable, upper) - lower)`; slabs entirely
/// above the income contribute nothing and are omitted. Contributions sum
/// exactly to the total liability by construction.
fn slab_breakdown(rules: &RegimeRules, taxable_income: Money) -> Vec<SlabContribution> {
    let mut contributions = Vec::new();

    for slab in &rules.slabs {
        let ceiling = match slab.upper {
            Some(upper) => taxable_income.min(upper),
            None => taxable_income,
        };
        let portion = ceiling.reduce_by(slab.lower);
        if portion.is_zero() {
            continue;
        }

        contributions.push(SlabContribution {
            lower: slab.lower,
            upper: slab.upper,
            rate_bps: slab.rate_bps,
            amount: portion,
            tax: portion.apply_bps(slab.rate_bps),
        });
    }

    contributions
}

/// Rate of the slab the taxable income currently falls in.
///
/// The income's top rupee sits in the last slab whose lower bound it
/// exceeds, so a boundary income (exactly 2,50,000) is still marginal at
/// the rate below the boundary.
fn marginal_rate_bps(rules: &RegimeRules, taxable_income: Money) -> u32 {
    let mut rate = rules.slabs.first().map(|s| s.rate_bps).unwrap_or(0);
    for slab in &rules.slabs {
        if taxable_income > slab.lower {
            rate = slab.rate_bps;
        }
    }
    rate
}

/// Reject records carrying negative amounts. The classifier cannot produce
/// them; a hand-built record that does is a programming error.
fn validate_record(record: &FinancialRecord) -> Result<()> {
    for (name, amount) in record.amounts() {
        if amount.is_negative() {
            return Err(Error::InvalidData(format!(
                "negative amount in field {}: {}",
                name, amount
            )));
        }
    }
    Ok(())
}
