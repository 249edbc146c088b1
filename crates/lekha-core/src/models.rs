//! Domain models for Lekha

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Tax regime selector
///
/// Each regime carries its own slab table and deduction-eligibility flag in
/// the loaded `TaxConfig`; adding a regime means adding a variant and a
/// config section, not new arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    Old,
    New,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }
}

impl std::str::FromStr for Regime {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "old" => Ok(Self::Old),
            "new" => Ok(Self::New),
            _ => Err(format!("Unknown regime: {} (expected 'old' or 'new')", s)),
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Statutory deduction sections, each with an independent cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "80C")]
    S80C,
    #[serde(rename = "80D")]
    S80D,
    #[serde(rename = "80E")]
    S80E,
    #[serde(rename = "80G")]
    S80G,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S80C => "80C",
            Self::S80D => "80D",
            Self::S80E => "80E",
            Self::S80G => "80G",
        }
    }

    pub fn all() -> &'static [Section] {
        &[Self::S80C, Self::S80D, Self::S80E, Self::S80G]
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "80c" | "section80c" => Ok(Self::S80C),
            "80d" | "section80d" => Ok(Self::S80D),
            "80e" | "section80e" => Ok(Self::S80E),
            "80g" | "section80g" => Ok(Self::S80G),
            _ => Err(format!("Unknown deduction section: {}", s)),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured financial record classified from one OCR text blob.
///
/// Every amount defaults to zero and identification fields to `None`; a field
/// the classifier could not find is absent, never an error. The record is
/// built once per run and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Permanent Account Number, present only if it matched the fixed pattern
    pub pan: Option<String>,
    /// Aadhaar number (12 digits, spaces stripped), present only if valid
    pub aadhaar: Option<String>,

    // Taxable income components
    pub salary: Money,
    pub business_income: Money,
    pub interest_income: Money,
    pub rental_income: Money,
    pub short_term_gains: Money,
    pub long_term_gains: Money,

    // Income adjustments
    /// Offsets salary, floored at zero
    pub standard_deduction: Money,
    /// Offsets rental income, floored at zero
    pub home_loan_interest: Money,

    // Exempt income, tracked but never taxed
    pub agricultural_income: Money,
    pub dividend_income: Money,

    // Declared section-wise deductions (pre-clamp)
    pub section_80c: Money,
    pub section_80d: Money,
    pub section_80e: Money,
    pub section_80g: Money,
}

impl FinancialRecord {
    /// Salary after the standard deduction, floored at zero
    pub fn taxable_salary(&self) -> Money {
        self.salary.reduce_by(self.standard_deduction)
    }

    /// Rental income after home-loan interest, floored at zero
    pub fn taxable_rental(&self) -> Money {
        self.rental_income.reduce_by(self.home_loan_interest)
    }

    /// Sum of all taxable income components, before deductions.
    /// Exempt income is excluded.
    pub fn gross_total_income(&self) -> Money {
        self.taxable_salary()
            + self.business_income
            + self.interest_income
            + self.taxable_rental()
            + self.short_term_gains
            + self.long_term_gains
    }

    /// Agricultural plus dividend income; reported, never taxed
    pub fn exempt_income(&self) -> Money {
        self.agricultural_income + self.dividend_income
    }

    /// Declared (pre-clamp) amount for a deduction section
    pub fn declared(&self, section: Section) -> Money {
        match section {
            Section::S80C => self.section_80c,
            Section::S80D => self.section_80d,
            Section::S80E => self.section_80e,
            Section::S80G => self.section_80g,
        }
    }

    /// All monetary fields, for precondition validation in the engine
    pub(crate) fn amounts(&self) -> [(&'static str, Money); 14] {
        [
            ("salary", self.salary),
            ("business_income", self.business_income),
            ("interest_income", self.interest_income),
            ("rental_income", self.rental_income),
            ("short_term_gains", self.short_term_gains),
            ("long_term_gains", self.long_term_gains),
            ("standard_deduction", self.standard_deduction),
            ("home_loan_interest", self.home_loan_interest),
            ("agricultural_income", self.agricultural_income),
            ("dividend_income", self.dividend_income),
            ("section_80c", self.section_80c),
            ("section_80d", self.section_80d),
            ("section_80e", self.section_80e),
            ("section_80g", self.section_80g),
        ]
    }
}

/// Tax contributed by one slab of the regime's table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabContribution {
    pub lower: Money,
    /// `None` for the unbounded top slab
    pub upper: Option<Money>,
    /// Marginal rate in basis points
    pub rate_bps: u32,
    /// Portion of taxable income falling inside this slab
    pub amount: Money,
    pub tax: Money,
}

/// Per-section deduction line after clamping to the statutory cap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    pub section: Section,
    pub declared: Money,
    pub cap: Money,
    /// `min(declared, cap)` — amounts above the cap are silently truncated
    pub eligible: Money,
}

/// A recommendation to use unused headroom in a deduction section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSuggestion {
    pub section: Section,
    pub declared: Money,
    pub cap: Money,
    /// `cap - declared`; always positive, sections at/over cap are skipped
    pub headroom: Money,
    /// Headroom times the marginal rate at the current taxable income
    pub potential_saving: Money,
}

/// Computed liability under one regime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub regime: Regime,
    pub gross_total_income: Money,
    pub exempt_income: Money,
    /// Per-section breakdown; empty for regimes that ignore deductions
    pub deductions: Vec<DeductionLine>,
    /// Sum of clamped section amounts (zero where deductions are ignored)
    pub total_deductions: Money,
    /// Gross total income minus eligible deductions, floored at zero
    pub taxable_income: Money,
    /// Ordered slab contributions; sums exactly to `total_tax`
    pub slabs: Vec<SlabContribution>,
    pub total_tax: Money,
    /// Ordered by potential saving, descending; empty for the new regime
    pub suggestions: Vec<DeductionSuggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regime_round_trip() {
        assert_eq!("old".parse::<Regime>().unwrap(), Regime::Old);
        assert_eq!("NEW".parse::<Regime>().unwrap(), Regime::New);
        assert!("flat".parse::<Regime>().is_err());
        assert_eq!(Regime::Old.to_string(), "old");
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("80c".parse::<Section>().unwrap(), Section::S80C);
        assert_eq!("80G".parse::<Section>().unwrap(), Section::S80G);
        assert!("80z".parse::<Section>().is_err());
    }

    #[test]
    fn test_gross_total_income_applies_offsets() {
        let record = FinancialRecord {
            salary: Money::from_rupees(700_000),
            standard_deduction: Money::from_rupees(50_000),
            rental_income: Money::from_rupees(200_000),
            home_loan_interest: Money::from_rupees(250_000),
            business_income: Money::from_rupees(100_000),
            ..Default::default()
        };
        // Salary 7L - 50k standard deduction, rental fully offset, plus business
        assert_eq!(record.gross_total_income(), Money::from_rupees(750_000));
    }

    #[test]
    fn test_exempt_income_excluded_from_gross() {
        let record = FinancialRecord {
            salary: Money::from_rupees(400_000),
            agricultural_income: Money::from_rupees(300_000),
            dividend_income: Money::from_rupees(50_000),
            ..Default::default()
        };
        assert_eq!(record.gross_total_income(), Money::from_rupees(400_000));
        assert_eq!(record.exempt_income(), Money::from_rupees(350_000));
    }
}
