//! Plain-text rendering of an evaluation for the terminal.

use std::fmt::Write;

use muster_core::evaluation::Evaluation;
use muster_core::roster::Roster;

/// Render costs, errors, and warnings as a short text block.
#[must_use]
pub fn render_evaluation(roster: &Roster, evaluation: &Evaluation) -> String {
    let costs = &evaluation.costs;
    let mut out = String::new();

    let _ = writeln!(out, "{}", roster.company_name);
    let _ = writeln!(
        out,
        "Total: {} / {} FP",
        costs.total_cost, roster.force_point_limit
    );
    for (label, value) in [
        ("Retinue", costs.retinue_cost),
        ("Legendary leader", costs.legendary_cost),
        ("Units", costs.units_cost),
        ("Ships", costs.ships_cost),
        ("Characters", costs.characters_cost),
        ("Faction upgrades", costs.faction_upgrades_cost),
    ] {
        if value > 0 {
            let _ = writeln!(out, "  {label}: {value}");
        }
    }

    for error in &evaluation.report.errors {
        let _ = writeln!(out, "ERROR: {error}");
    }
    for warning in &evaluation.report.warnings {
        let _ = writeln!(out, "WARNING: {warning}");
    }
    if evaluation.report.is_legal() {
        let _ = writeln!(out, "Company is legal.");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use muster_core::evaluation::evaluate;
    use muster_test_utils::fixtures::test_catalog;

    #[test]
    fn test_render_lists_errors_and_skips_zero_costs() {
        let catalog = test_catalog();
        let roster = Roster::new();
        let text = render_evaluation(&roster, &evaluate(&roster, &catalog));

        assert!(text.starts_with("My Company\n"));
        assert!(text.contains("Total: 0 / 200 FP"));
        assert!(text.contains("ERROR: Select a Faction to begin building your Company."));
        assert!(!text.contains("Retinue:"));
        assert!(!text.contains("Company is legal."));
    }
}
