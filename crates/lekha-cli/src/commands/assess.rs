//! Tax assessment command: classify OCR text and compute liability

use std::path::Path;

use anyhow::Result;
use lekha_core::{Classifier, Regime, TaxConfig, TaxEngine, TaxResult};
use serde_json::json;

use super::{format_inr, format_rate, load_config, read_input};

/// Which regimes to assess
enum RegimeChoice {
    One(Regime),
    Both,
}

fn parse_choice(regime: &str) -> Result<RegimeChoice> {
    if regime.eq_ignore_ascii_case("both") {
        return Ok(RegimeChoice::Both);
    }
    let regime: Regime = regime.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    Ok(RegimeChoice::One(regime))
}

pub fn cmd_assess(config: Option<&Path>, file: &Path, regime: &str, json: bool) -> Result<()> {
    let choice = parse_choice(regime)?;
    let config: TaxConfig = load_config(config)?;
    let text = read_input(file)?;

    let classifier = Classifier::new()?;
    let record = classifier.classify(&text);
    let engine = TaxEngine::new(&config);

    let results = match choice {
        RegimeChoice::One(regime) => vec![engine.assess(&record, regime)?],
        RegimeChoice::Both => {
            let (old, new) = engine.assess_both(&record)?;
            vec![old, new]
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "record": record,
                "results": results,
            }))?
        );
        return Ok(());
    }

    for result in &results {
        print_result(result);
        println!();
    }

    if results.len() == 2 {
        let (old, new) = (&results[0], &results[1]);
        let better = if old.total_tax <= new.total_tax {
            Regime::Old
        } else {
            Regime::New
        };
        let diff = if old.total_tax <= new.total_tax {
            new.total_tax - old.total_tax
        } else {
            old.total_tax - new.total_tax
        };
        println!(
            "The {} regime saves {} for this record.",
            better,
            format_inr(diff)
        );
    }
    Ok(())
}

fn print_result(result: &TaxResult) {
    println!("=== {} regime ===", capitalize(result.regime.as_str()));
    println!(
        "Gross total income:   {}",
        format_inr(result.gross_total_income)
    );
    if !result.exempt_income.is_zero() {
        println!(
            "Exempt income:        {} (not taxed)",
            format_inr(result.exempt_income)
        );
    }

    if !result.deductions.is_empty() {
        println!("Deductions");
        for line in &result.deductions {
            let note = if line.declared > line.cap {
                format!("  (declared {}, capped)", format_inr(line.declared))
            } else {
                String::new()
            };
            println!(
                "  {}: {} of {} cap{}",
                line.section,
                format_inr(line.eligible),
                format_inr(line.cap),
                note
            );
        }
    }
    println!(
        "Total deductions:     {}",
        format_inr(result.total_deductions)
    );
    println!(
        "Taxable income:       {}",
        format_inr(result.taxable_income)
    );

    println!("Slab breakdown");
    if result.slabs.is_empty() {
        println!("  (no taxable income)");
    }
    for slab in &result.slabs {
        let range = match slab.upper {
            Some(upper) => format!("{} - {}", format_inr(slab.lower), format_inr(upper)),
            None => format!("above {}", format_inr(slab.lower)),
        };
        println!(
            "  {} @ {}: {} taxed, {} due",
            range,
            format_rate(slab.rate_bps),
            format_inr(slab.amount),
            format_inr(slab.tax)
        );
    }
    println!("Total tax:            {}", format_inr(result.total_tax));

    if !result.suggestions.is_empty() {
        println!("Suggestions");
        for s in &result.suggestions {
            println!(
                "  Section {}: {} headroom left; using it could save about {}",
                s.section,
                format_inr(s.headroom),
                format_inr(s.potential_saving)
            );
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
