//! One-shot recomputation after a roster edit.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::cost::{compute_costs, CostBreakdown};
use crate::roster::Roster;
use crate::validation::{validate, ValidationReport};

/// Costs and validation for one roster snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    /// Cost breakdown.
    pub costs: CostBreakdown,
    /// Composition errors and warnings.
    pub report: ValidationReport,
}

/// Run both engines over a roster.
#[must_use]
pub fn evaluate(roster: &Roster, catalog: &Catalog) -> Evaluation {
    let costs = compute_costs(roster, catalog);
    let report = validate(roster, catalog);

    tracing::debug!(
        total = costs.total_cost,
        limit = roster.force_point_limit,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Evaluated roster '{}'",
        roster.company_name
    );

    Evaluation { costs, report }
}
