//! Form-field export for the PDF-filling collaborator
//!
//! Flattens a classified record and its computed results into a map of
//! named form-field identifiers to plain string values. The filling service
//! owns PDF layout; this module only knows field names and values.
//!
//! Values are rendered in plain rupees with two decimals and no digit
//! grouping — localization is the formatting collaborator's job.

use std::collections::BTreeMap;

use crate::models::{FinancialRecord, Regime, TaxResult};

/// Build the flat field map consumed by the form-filling service.
///
/// Field names follow the fillable ITR template's internal names. Absent
/// identifiers map to empty strings so the form is always fully populated.
pub fn form_fields(
    record: &FinancialRecord,
    old: &TaxResult,
    new: &TaxResult,
) -> BTreeMap<String, String> {
    debug_assert_eq!(old.regime, Regime::Old);
    debug_assert_eq!(new.regime, Regime::New);

    let mut fields = BTreeMap::new();
    let mut put = |key: &str, value: String| {
        fields.insert(key.to_string(), value);
    };

    put("PANField", record.pan.clone().unwrap_or_default());
    put("AadhaarField", record.aadhaar.clone().unwrap_or_default());

    put("TaxableSalaryField", record.taxable_salary().to_string());
    put("BusinessIncomeField", record.business_income.to_string());
    put("InterestIncomeField", record.interest_income.to_string());
    put("RentalIncomeField", record.taxable_rental().to_string());
    put(
        "CapitalGainsField",
        (record.short_term_gains + record.long_term_gains).to_string(),
    );
    put("ExemptIncomeField", record.exempt_income().to_string());

    put("GrossTotalIncomeField", old.gross_total_income.to_string());
    put("TotalDeductionsField", old.total_deductions.to_string());
    put("TaxableIncomeField", old.taxable_income.to_string());
    put("TaxOldRegimeField", old.total_tax.to_string());
    put("TaxNewRegimeField", new.total_tax.to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxConfig;
    use crate::engine::TaxEngine;
    use crate::money::Money;

    #[test]
    fn test_form_fields_complete_and_plain() {
        let config = TaxConfig::load_default().unwrap();
        let engine = TaxEngine::new(&config);

        let record = FinancialRecord {
            pan: Some("ABCDE1234F".to_string()),
            salary: Money::from_rupees(600_000),
            section_80c: Money::from_rupees(200_000),
            ..Default::default()
        };
        let (old, new) = engine.assess_both(&record).unwrap();
        let fields = form_fields(&record, &old, &new);

        assert_eq!(fields["PANField"], "ABCDE1234F");
        // Aadhaar absent maps to empty, never missing
        assert_eq!(fields["AadhaarField"], "");
        assert_eq!(fields["TaxableSalaryField"], "600000.00");
        assert_eq!(fields["TotalDeductionsField"], "150000.00");
        assert_eq!(fields["TaxableIncomeField"], "450000.00");
        assert_eq!(fields["TaxOldRegimeField"], "10000.00");
        // No grouping in exported values
        assert!(!fields["TaxableSalaryField"].contains(','));
    }
}
