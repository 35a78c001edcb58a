//! Company composition rules.
//!
//! [`validate`] runs the checks in a fixed order so reports are stable.
//! The first three checks are prerequisites: if one fails, its error is
//! the whole report. Every later check runs and accumulates.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::cost;
use crate::data::UnitRole;
use crate::roster::Roster;
use crate::rules;

/// A composition violation that makes the roster illegal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RosterError {
    /// No faction selected.
    #[error("Select a Faction to begin building your Company.")]
    NoFaction,

    /// No company list selected.
    #[error("Select a Company List.")]
    NoCompanyList,

    /// Neither a leader type nor a legendary leader selected.
    #[error("Select a Leader type.")]
    NoLeader,

    /// The legendary leader cannot lead the chosen retinue type.
    #[error("{legendary} requires a {} retinue, not a {retinue}.", .required.join(" or "))]
    RetinueMismatch {
        /// Legendary leader name.
        legendary: String,
        /// Names of the acceptable retinue types.
        required: Vec<String>,
        /// Name of the selected retinue type.
        retinue: String,
    },

    /// Fewer than the minimum Main Battle units.
    #[error("Must include at least {} Main Battle units (currently {count}).", rules::MIN_MAIN_BATTLE)]
    TooFewMainBattle {
        /// Main Battle units present.
        count: usize,
    },

    /// More Vanguard units than the Main Battle supports.
    #[error("Too many Vanguard units. With {main_battle} Main Battle: max {max}.")]
    TooManyVanguard {
        /// Main Battle units present.
        main_battle: usize,
        /// Vanguard units allowed.
        max: usize,
    },

    /// More Reserve units than the Main Battle supports.
    #[error("Too many Reserve units. With {main_battle} Main Battle: max {max}.")]
    TooManyReserve {
        /// Main Battle units present.
        main_battle: usize,
        /// Reserve units allowed.
        max: usize,
    },

    /// Total cost exceeds the Force Point limit.
    #[error("Over Force Point limit by {over} FP.")]
    OverLimit {
        /// Force Points over budget.
        over: u32,
    },

    /// Grizzled Veteran taken without the Force Points to allow one.
    #[error("Grizzled Veteran: max 1 per 100 FP. Not enough FP.")]
    GrizzledVeteranCap,
}

/// Advisory, non-blocking feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterWarning {
    /// More units of a capped role could be added.
    OpenSlots {
        /// Vanguard or Reserve.
        role: UnitRole,
        /// Units that could still be added.
        remaining: usize,
    },

    /// Naval units are present without a real ship.
    NavalUnitsWithoutShip,

    /// Budget is nearly spent.
    NearLimit {
        /// Force Points left.
        remaining: u32,
    },
}

impl fmt::Display for RosterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenSlots { role, remaining } => write!(
                f,
                "You may add up to {remaining} more {} unit(s).",
                role.display_name()
            ),
            Self::NavalUnitsWithoutShip => write!(
                f,
                "You have naval units but no ships. Sea battles require at least one ship (non-Boat)."
            ),
            Self::NearLimit { remaining } => write!(f, "{remaining} FP remaining."),
        }
    }
}

/// Outcome of validating a roster.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Violations, in check order.
    pub errors: Vec<RosterError>,
    /// Advisories, in check order.
    pub warnings: Vec<RosterWarning>,
}

impl ValidationReport {
    fn single(error: RosterError) -> Self {
        Self {
            errors: vec![error],
            warnings: Vec::new(),
        }
    }

    /// A roster with no errors is tournament-legal. Warnings do not matter.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages as shown to the player.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Warning messages as shown to the player.
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Unit counts per role for the selected company list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleCounts {
    /// Main Battle units.
    pub main_battle: usize,
    /// Vanguard units.
    pub vanguard: usize,
    /// Reserve units.
    pub reserve: usize,
}

impl RoleCounts {
    /// Vanguard units the Main Battle supports.
    #[must_use]
    pub const fn max_vanguard(&self) -> usize {
        self.main_battle / rules::MAIN_BATTLE_PER_VANGUARD
    }

    /// Reserve units the Main Battle supports.
    #[must_use]
    pub const fn max_reserve(&self) -> usize {
        self.main_battle / rules::MAIN_BATTLE_PER_RESERVE
    }
}

/// Count the roster's units by role in its company list.
///
/// An unset or unknown company list counts nothing.
#[must_use]
pub fn role_counts(roster: &Roster, catalog: &Catalog) -> RoleCounts {
    let Some(list) = roster
        .company_list_id
        .as_deref()
        .and_then(|id| catalog.company_list(id))
    else {
        return RoleCounts::default();
    };

    let count = |role: UnitRole| {
        let ids = list.units_in(role);
        roster
            .units
            .iter()
            .filter(|u| ids.contains(&u.unit_profile_id))
            .count()
    };

    RoleCounts {
        main_battle: count(UnitRole::MainBattle),
        vanguard: count(UnitRole::Vanguard),
        reserve: count(UnitRole::Reserve),
    }
}

fn retinue_mismatch(roster: &Roster, catalog: &Catalog) -> Option<RosterError> {
    let leader_type = roster.leader_type_id.as_deref()?;
    let legendary = catalog.legendary_leader(roster.legendary_leader_id.as_deref()?)?;

    if legendary.accepts_retinue(leader_type) {
        return None;
    }

    Some(RosterError::RetinueMismatch {
        legendary: legendary.name.clone(),
        required: legendary
            .allowed_retinue_types
            .iter()
            .map(|t| catalog.standard_leader_name(t).to_string())
            .collect(),
        retinue: catalog.standard_leader_name(leader_type).to_string(),
    })
}

fn has_naval_units_without_ship(roster: &Roster, catalog: &Catalog) -> bool {
    let has_naval_units = roster
        .units
        .iter()
        .any(|u| rules::is_naval_unit(&u.unit_profile_id));
    let has_ship = roster
        .ships
        .iter()
        .filter_map(|s| catalog.ship(&s.ship_profile_id))
        .any(|ship| !ship.is_boat());

    has_naval_units && !has_ship
}

/// Validate a roster against the composition rules.
#[must_use]
pub fn validate(roster: &Roster, catalog: &Catalog) -> ValidationReport {
    if roster.faction_id.is_none() {
        return ValidationReport::single(RosterError::NoFaction);
    }
    if roster.company_list_id.is_none() {
        return ValidationReport::single(RosterError::NoCompanyList);
    }
    if roster.leader_type_id.is_none() && roster.legendary_leader_id.is_none() {
        return ValidationReport::single(RosterError::NoLeader);
    }

    let mut report = ValidationReport::default();

    if let Some(mismatch) = retinue_mismatch(roster, catalog) {
        report.errors.push(mismatch);
    }

    let counts = role_counts(roster, catalog);
    let max_vanguard = counts.max_vanguard();
    let max_reserve = counts.max_reserve();

    if counts.main_battle < rules::MIN_MAIN_BATTLE {
        report.errors.push(RosterError::TooFewMainBattle {
            count: counts.main_battle,
        });
    }
    if counts.vanguard > max_vanguard {
        report.errors.push(RosterError::TooManyVanguard {
            main_battle: counts.main_battle,
            max: max_vanguard,
        });
    }
    if counts.reserve > max_reserve {
        report.errors.push(RosterError::TooManyReserve {
            main_battle: counts.main_battle,
            max: max_reserve,
        });
    }
    if max_vanguard > counts.vanguard {
        report.warnings.push(RosterWarning::OpenSlots {
            role: UnitRole::Vanguard,
            remaining: max_vanguard - counts.vanguard,
        });
    }
    if max_reserve > counts.reserve {
        report.warnings.push(RosterWarning::OpenSlots {
            role: UnitRole::Reserve,
            remaining: max_reserve - counts.reserve,
        });
    }

    if has_naval_units_without_ship(roster, catalog) {
        report.warnings.push(RosterWarning::NavalUnitsWithoutShip);
    }

    let total = cost::total_cost(roster, catalog);
    let limit = roster.force_point_limit;
    if total > limit {
        report.errors.push(RosterError::OverLimit {
            over: total - limit,
        });
    } else {
        let remaining = limit - total;
        if remaining > 0 && remaining <= rules::NEAR_LIMIT_THRESHOLD {
            report.warnings.push(RosterWarning::NearLimit { remaining });
        }
    }

    if roster.characters.contains(rules::GRIZZLED_VETERAN)
        && limit / rules::GRIZZLED_VETERAN_FP_PER < 1
    {
        report.errors.push(RosterError::GrizzledVeteranCap);
    }

    report
}
