//! Financial field classifier
//!
//! Maps one blob of OCR-extracted text to a structured `FinancialRecord`
//! using a declarative table of label patterns: one independent pattern per
//! field category, first match wins. Adding a field category means adding a
//! table row, not a branch.
//!
//! Classification never fails. OCR output is lossy, so a missing label, a
//! malformed number, or an invalid identifier resolves to a zero/absent
//! field rather than rejecting the whole document.

use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::models::FinancialRecord;
use crate::money::Money;

/// A numeric token: digit groups with optional separators, whitespace
/// allowed only after a comma (tolerates OCR line breaks mid-number),
/// optional decimal part of up to two digits.
const VALUE: &str = r"([0-9]+(?:\s*,\s*[0-9]+)*(?:\.[0-9]{1,2})?)";

/// Setter applied to the record when a field's pattern matches
type Assign = fn(&mut FinancialRecord, Money);

/// Field table: (log name, label pattern fragment, setter).
///
/// Label fragments are regex source, so OCR aliases go straight into the
/// row: scanners routinely read `Section 80G` as `Section 806`, and the
/// capital-gains labels appear with or without hyphens.
fn field_table() -> Vec<(&'static str, &'static str, Assign)> {
    vec![
        ("salary", r"Salary", |r, v| r.salary = v),
        ("business_income", r"Business", |r, v| r.business_income = v),
        ("interest_income", r"Interest\s+Income", |r, v| {
            r.interest_income = v
        }),
        ("rental_income", r"Rental", |r, v| r.rental_income = v),
        (
            "short_term_gains",
            r"Short[\s-]*Term\s+Capital\s+Gains",
            |r, v| r.short_term_gains = v,
        ),
        (
            "long_term_gains",
            r"Long[\s-]*Term\s+Capital\s+Gains",
            |r, v| r.long_term_gains = v,
        ),
        (
            "standard_deduction",
            r"Standard\s+Deduction",
            |r, v| r.standard_deduction = v,
        ),
        (
            "home_loan_interest",
            r"Home\s+Loan\s+Interest",
            |r, v| r.home_loan_interest = v,
        ),
        (
            "agricultural_income",
            r"Agricultural",
            |r, v| r.agricultural_income = v,
        ),
        ("dividend_income", r"Dividend", |r, v| r.dividend_income = v),
        ("section_80c", r"80\s*C", |r, v| r.section_80c = v),
        ("section_80d", r"80\s*D", |r, v| r.section_80d = v),
        ("section_80e", r"80\s*E", |r, v| r.section_80e = v),
        // OCR alias: 80G frequently misread as 806
        ("section_80g", r"80\s*[G6]", |r, v| r.section_80g = v),
    ]
}

/// A compiled field matcher
struct FieldMatcher {
    name: &'static str,
    regex: Regex,
    assign: Assign,
}

/// Pattern-based field classifier.
///
/// Compiles the field table once; `classify` is then a pure function of its
/// text input with no side effects.
pub struct Classifier {
    fields: Vec<FieldMatcher>,
    pan: Regex,
    aadhaar: Regex,
}

impl Classifier {
    pub fn new() -> Result<Self> {
        let mut fields = Vec::new();
        for (name, label, assign) in field_table() {
            // The label must not sit inside a longer word, a parenthesised
            // qualifier ("Standard Deduction (Salary)" is not a salary line),
            // or a separator-grouped number ("25,806" holds no 80G label).
            // Anything non-numeric may separate label and value on the line.
            let pattern = format!(r"(?im)(?:^|[^\w(,.]){}\b[^0-9\r\n]*{}", label, VALUE);
            fields.push(FieldMatcher {
                name,
                regex: Regex::new(&pattern)?,
                assign,
            });
        }

        // Fixed-format identifiers: 5 letters + 4 digits + 1 letter, and
        // 12 digits (OCR prints Aadhaar in groups of 4). Anything that does
        // not conform is omitted, never partially kept.
        let pan = Regex::new(r"(?i)\bPAN\b[^A-Za-z0-9\r\n]*([A-Za-z]{5}[0-9]{4}[A-Za-z])\b")?;
        let aadhaar =
            Regex::new(r"(?i)\bAadhaar\b[^0-9\r\n]*([0-9]{4}\s?[0-9]{4}\s?[0-9]{4})\b")?;

        Ok(Self {
            fields,
            pan,
            aadhaar,
        })
    }

    /// Classify one blob of OCR text into a financial record.
    ///
    /// Unmatched categories stay at their zero/absent defaults; this
    /// function cannot fail on any input.
    pub fn classify(&self, text: &str) -> FinancialRecord {
        let mut record = FinancialRecord::default();

        if let Some(caps) = self.pan.captures(text) {
            let pan = caps[1].to_uppercase();
            debug!(pan = %pan, "Matched PAN");
            record.pan = Some(pan);
        }

        if let Some(caps) = self.aadhaar.captures(text) {
            let digits: String = caps[1].chars().filter(|c| c.is_ascii_digit()).collect();
            debug!("Matched Aadhaar");
            record.aadhaar = Some(digits);
        }

        for field in &self.fields {
            let Some(caps) = field.regex.captures(text) else {
                continue;
            };
            match Money::parse(&caps[1]) {
                Some(amount) => {
                    debug!(field = field.name, amount = %amount, "Matched field");
                    (field.assign)(&mut record, amount);
                }
                None => {
                    // Token looked numeric to the scanner but not to the
                    // parser; keep the zero default.
                    debug!(field = field.name, token = &caps[1], "Unparseable value");
                }
            }
        }

        record
    }
}
