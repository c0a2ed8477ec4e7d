//! Sample Assessment Driver
//!
//! Runs the three hardcoded sample sites through the engine and prints
//! one feasibility summary line per site followed by the full result
//! record as JSON.
//!
//! Run with: cargo run --bin assess_sample

use rtrwh_engine::input::sample_sites;
use rtrwh_engine::AssessmentEngine;

fn main() -> anyhow::Result<()> {
    println!("RTRWH Assessment Engine - sample sites\n");
    println!("======================================\n");

    let engine = AssessmentEngine::new();

    for input in sample_sites() {
        let result = engine.assess(&input)?;

        println!(
            "{}: score {} ({}), annual harvest {:.0} L, total cost {:.0}",
            input.location.address,
            result.feasibility.score,
            result.feasibility.category.display_text(),
            result.potential.annual_harvest,
            result.economics.total_cost,
        );
        for reason in &result.feasibility.reasons {
            println!("  - {reason}");
        }
        println!("\n{}\n", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
