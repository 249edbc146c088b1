//! Integration tests for lekha-core
//!
//! These tests exercise the full classify → assess → export workflow.

use lekha_core::{
    classify::Classifier, config::TaxConfig, engine::TaxEngine, export::form_fields,
    models::Regime, models::Section, money::Money,
};

/// OCR text of a representative scanned tax summary, including the usual
/// noise: inconsistent spacing, a misread 80G label, and a currency marker.
fn sample_document() -> &'static str {
    "\
INCOME TAX SUMMARY  FY 2023-24
PAN: ABCDE1234F
Aadhaar: 9876 5432 1098

Salary Income:  Rs. 14,50,000
Standard Deduction (Salary): 50,000
Business Income: 0
Interest Income (Fixed Deposits): 35,000
Rental Income : 2,40,000
Home Loan Interest: 90,000
Short-Term Capital Gains: 15,000
Long-Term Capital Gains: 1,10,000

Agricultural Income: 80,000
Dividend Income: 12,000

Section 80C: 1,20,000
Section 80D: 18,000
Section 80E: 0
Section 806: 10,000
"
}

#[test]
fn test_full_classify_assess_workflow() {
    let classifier = Classifier::new().unwrap();
    let config = TaxConfig::load_default().unwrap();
    let engine = TaxEngine::new(&config);

    let record = classifier.classify(sample_document());

    assert_eq!(record.pan.as_deref(), Some("ABCDE1234F"));
    assert_eq!(record.aadhaar.as_deref(), Some("987654321098"));
    assert_eq!(record.salary, Money::from_rupees(1_450_000));
    assert_eq!(record.section_80g, Money::from_rupees(10_000));

    // Gross: (14.5L - 50k) + 0 + 35k + (2.4L - 90k) + 15k + 1.1L = 17,10,000
    assert_eq!(record.gross_total_income(), Money::from_rupees(1_710_000));
    // Agricultural and dividend income never enter the gross
    assert_eq!(record.exempt_income(), Money::from_rupees(92_000));

    let (old, new) = engine.assess_both(&record).unwrap();

    // Old regime: deductions 1.2L + 18k + 0 + 10k = 1,48,000 (all under cap)
    assert_eq!(old.total_deductions, Money::from_rupees(148_000));
    assert_eq!(old.taxable_income, Money::from_rupees(1_562_000));
    // 12,500 + 1,00,000 + 30% * 5,62,000 = 2,81,100
    assert_eq!(old.total_tax, Money::from_rupees(281_100));

    // New regime ignores the declared sections entirely
    assert_eq!(new.total_deductions, Money::ZERO);
    assert_eq!(new.taxable_income, Money::from_rupees(1_710_000));
    // 12,500 + 25,000 + 37,500 + 50,000 + 62,500 + 30% * 2,10,000 = 2,50,500
    assert_eq!(new.total_tax, Money::from_rupees(250_500));
    assert!(new.suggestions.is_empty());
}

#[test]
fn test_overdeclared_80c_clamps_and_suppresses_suggestion() {
    // "Salary: 6,00,000" and "80C: 2,00,000" under the old regime:
    // 80C clamps to its 1,50,000 cap, taxable = 4,50,000,
    // tax = 5% of 2,00,000 = 10,000, and 80C gets no headroom suggestion.
    let classifier = Classifier::new().unwrap();
    let config = TaxConfig::load_default().unwrap();
    let engine = TaxEngine::new(&config);

    let record = classifier.classify("Salary: 6,00,000\n80C: 2,00,000\n");
    let result = engine.assess(&record, Regime::Old).unwrap();

    assert_eq!(result.gross_total_income, Money::from_rupees(600_000));
    assert_eq!(result.total_deductions, Money::from_rupees(150_000));
    assert_eq!(result.taxable_income, Money::from_rupees(450_000));
    assert_eq!(result.total_tax, Money::from_rupees(10_000));
    assert!(result
        .suggestions
        .iter()
        .all(|s| s.section != Section::S80C));
}

#[test]
fn test_empty_input_zero_liability() {
    let classifier = Classifier::new().unwrap();
    let config = TaxConfig::load_default().unwrap();
    let engine = TaxEngine::new(&config);

    let record = classifier.classify("");
    assert!(record.pan.is_none());
    assert!(record.aadhaar.is_none());

    let (old, new) = engine.assess_both(&record).unwrap();
    assert_eq!(old.taxable_income, Money::ZERO);
    assert_eq!(old.total_tax, Money::ZERO);
    assert_eq!(new.total_tax, Money::ZERO);
}

#[test]
fn test_classifier_never_panics_on_noise() {
    let classifier = Classifier::new().unwrap();
    let inputs = [
        "",
        "\n\n\n",
        "PAN: !!!! Aadhaar: xxxx",
        "Salary: -100",
        "Salary: 99999999999999999999999999",
        "80C 80D 80E 80G",
        "ひらがな ₹₹₹ §§§",
    ];
    for text in inputs {
        let record = classifier.classify(text);
        for (name, amount) in [
            ("salary", record.salary),
            ("section_80c", record.section_80c),
            ("section_80g", record.section_80g),
        ] {
            assert!(!amount.is_negative(), "{} negative for {:?}", name, text);
        }
    }
}

#[test]
fn test_form_fields_round_trip_through_json() {
    let classifier = Classifier::new().unwrap();
    let config = TaxConfig::load_default().unwrap();
    let engine = TaxEngine::new(&config);

    let record = classifier.classify(sample_document());
    let (old, new) = engine.assess_both(&record).unwrap();
    let fields = form_fields(&record, &old, &new);

    let json = serde_json::to_string(&fields).unwrap();
    let parsed: std::collections::BTreeMap<String, String> =
        serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, fields);
    assert_eq!(parsed["PANField"], "ABCDE1234F");
    assert_eq!(parsed["TaxOldRegimeField"], "281100.00");
    assert_eq!(parsed["TaxNewRegimeField"], "250500.00");
}

#[test]
fn test_custom_config_changes_liability_not_code() {
    // A hypothetical future year raises the nil band to 3,00,000
    let raw = r#"
        [old_regime]
        allows_deductions = true
        slabs = [
            { up_to = 300000, rate_bps = 0 },
            { up_to = 600000, rate_bps = 500 },
            { rate_bps = 2000 },
        ]

        [new_regime]
        allows_deductions = false
        slabs = [
            { up_to = 300000, rate_bps = 0 },
            { rate_bps = 1000 },
        ]

        [deduction_caps]
        section_80c = 200000
        section_80d = 50000
        section_80e = 50000
        section_80g = 100000
    "#;
    let config = TaxConfig::from_toml_str(raw).unwrap();
    let engine = TaxEngine::new(&config);

    let record = lekha_core::FinancialRecord {
        salary: Money::from_rupees(500_000),
        ..Default::default()
    };
    let result = engine.assess(&record, Regime::Old).unwrap();
    // 5% of the 2,00,000 above the raised nil band
    assert_eq!(result.total_tax, Money::from_rupees(10_000));
}
