//! Config inspection: print slab tables and deduction caps

use std::path::Path;

use anyhow::Result;
use lekha_core::{Money, Regime, Section, TaxConfig};

use super::{format_inr, format_rate, load_config};

pub fn cmd_slabs(config: Option<&Path>, regime: Option<&str>) -> Result<()> {
    let config: TaxConfig = load_config(config)?;

    let regimes: Vec<Regime> = match regime {
        Some(r) => vec![r.parse().map_err(|e: String| anyhow::anyhow!(e))?],
        None => vec![Regime::Old, Regime::New],
    };

    for regime in regimes {
        let rules = config.rules(regime);
        println!("=== {} regime ===", regime);
        println!(
            "Section-wise deductions: {}",
            if rules.allows_deductions {
                "honored"
            } else {
                "not honored"
            }
        );
        for slab in &rules.slabs {
            match slab.upper {
                Some(upper) => println!(
                    "  {} - {}: {}",
                    format_inr(slab.lower),
                    format_inr(upper),
                    format_rate(slab.rate_bps)
                ),
                None => println!(
                    "  above {}: {}",
                    format_inr(slab.lower),
                    format_rate(slab.rate_bps)
                ),
            }
        }
        println!();
    }

    println!("Deduction caps");
    for &section in Section::all() {
        let cap: Money = config.cap(section);
        println!("  Section {}: {}", section, format_inr(cap));
    }
    Ok(())
}
