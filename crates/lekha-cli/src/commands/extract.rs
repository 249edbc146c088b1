//! Classification-only command

use std::path::Path;

use anyhow::Result;
use lekha_core::{Classifier, FinancialRecord};

use super::{format_inr, read_input};

pub fn cmd_extract(file: &Path, json: bool) -> Result<()> {
    let text = read_input(file)?;
    let classifier = Classifier::new()?;
    let record = classifier.classify(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }
    Ok(())
}

pub(crate) fn print_record(record: &FinancialRecord) {
    println!("=== Financial Record ===");
    println!(
        "PAN:                  {}",
        record.pan.as_deref().unwrap_or("(not found)")
    );
    println!(
        "Aadhaar:              {}",
        record.aadhaar.as_deref().unwrap_or("(not found)")
    );
    println!();
    println!("Income");
    println!("  Salary:             {}", format_inr(record.salary));
    println!(
        "  Standard deduction: {}",
        format_inr(record.standard_deduction)
    );
    println!(
        "  Business income:    {}",
        format_inr(record.business_income)
    );
    println!(
        "  Interest income:    {}",
        format_inr(record.interest_income)
    );
    println!("  Rental income:      {}", format_inr(record.rental_income));
    println!(
        "  Home loan interest: {}",
        format_inr(record.home_loan_interest)
    );
    println!(
        "  Short-term gains:   {}",
        format_inr(record.short_term_gains)
    );
    println!(
        "  Long-term gains:    {}",
        format_inr(record.long_term_gains)
    );
    println!();
    println!("Exempt income");
    println!(
        "  Agricultural:       {}",
        format_inr(record.agricultural_income)
    );
    println!(
        "  Dividend:           {}",
        format_inr(record.dividend_income)
    );
    println!();
    println!("Declared deductions");
    println!("  Section 80C:        {}", format_inr(record.section_80c));
    println!("  Section 80D:        {}", format_inr(record.section_80d));
    println!("  Section 80E:        {}", format_inr(record.section_80e));
    println!("  Section 80G:        {}", format_inr(record.section_80g));
    println!();
    println!(
        "Gross total income:   {}",
        format_inr(record.gross_total_income())
    );
}
