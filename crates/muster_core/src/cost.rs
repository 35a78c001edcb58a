//! Force Point cost engine.
//!
//! Every function here is pure over `(&Roster, &Catalog)`. Ids that do not
//! resolve in the catalog contribute exactly zero.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::roster::{Roster, ShipEntry, UnitEntry};

/// Cost of a roster broken down by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Retinue models plus retinue upgrades.
    pub retinue_cost: u32,
    /// Flat cost of the legendary leader.
    pub legendary_cost: u32,
    /// All unit entries with their upgrades.
    pub units_cost: u32,
    /// All ships with their options.
    pub ships_cost: u32,
    /// Enabled characters.
    pub characters_cost: u32,
    /// Purchased faction special rules.
    pub faction_upgrades_cost: u32,
    /// Sum of every category above.
    pub total_cost: u32,
}

/// Compute every cost category for a roster.
#[must_use]
pub fn compute_costs(roster: &Roster, catalog: &Catalog) -> CostBreakdown {
    let retinue_cost = retinue_cost(roster, catalog);
    let legendary_cost = legendary_cost(roster, catalog);
    let units_cost = units_cost(roster, catalog);
    let ships_cost = ships_cost(roster, catalog);
    let characters_cost = characters_cost(roster, catalog);
    let faction_upgrades_cost = faction_upgrades_cost(roster, catalog);

    CostBreakdown {
        retinue_cost,
        legendary_cost,
        units_cost,
        ships_cost,
        characters_cost,
        faction_upgrades_cost,
        total_cost: [
            retinue_cost,
            units_cost,
            ships_cost,
            characters_cost,
            faction_upgrades_cost,
        ]
        .into_iter()
        .fold(legendary_cost, u32::saturating_add),
    }
}

/// Retinue models at the standard leader's per-model price, without
/// upgrades.
#[must_use]
pub fn retinue_base_cost(roster: &Roster, catalog: &Catalog) -> u32 {
    roster
        .leader_type_id
        .as_deref()
        .and_then(|id| catalog.standard_leader(id))
        .map_or(0, |leader| leader.cost_per_model.saturating_mul(roster.retinue_size))
}

/// Retinue models plus enabled retinue upgrades.
///
/// A legendary leader does not replace this; it is charged on top.
#[must_use]
pub fn retinue_cost(roster: &Roster, catalog: &Catalog) -> u32 {
    let Some(leader) = roster
        .leader_type_id
        .as_deref()
        .and_then(|id| catalog.standard_leader(id))
    else {
        return 0;
    };

    let upgrades: u32 = roster
        .retinue_upgrades
        .iter()
        .filter_map(|id| leader.get_upgrade(id))
        .map(|upgrade| upgrade.cost_for(roster.retinue_size))
        .fold(0, u32::saturating_add);

    leader
        .cost_per_model
        .saturating_mul(roster.retinue_size)
        .saturating_add(upgrades)
}

/// Flat cost of the selected legendary leader.
#[must_use]
pub fn legendary_cost(roster: &Roster, catalog: &Catalog) -> u32 {
    roster
        .legendary_leader_id
        .as_deref()
        .and_then(|id| catalog.legendary_leader(id))
        .map_or(0, |legendary| legendary.cost)
}

/// Cost of one unit entry, upgrades included.
#[must_use]
pub fn unit_entry_cost(entry: &UnitEntry, catalog: &Catalog) -> u32 {
    let Some(profile) = catalog.unit(&entry.unit_profile_id) else {
        tracing::trace!("Unit profile '{}' not in catalog", entry.unit_profile_id);
        return 0;
    };

    let upgrades: u32 = entry
        .upgrades
        .iter()
        .filter_map(|id| profile.get_upgrade(id))
        .map(|upgrade| upgrade.cost_for(entry.quantity))
        .fold(0, u32::saturating_add);

    profile
        .cost_per_model
        .saturating_mul(entry.quantity)
        .saturating_add(upgrades)
}

/// Cost of every unit entry.
#[must_use]
pub fn units_cost(roster: &Roster, catalog: &Catalog) -> u32 {
    roster
        .units
        .iter()
        .map(|entry| unit_entry_cost(entry, catalog))
        .fold(0, u32::saturating_add)
}

/// Cost of one ship entry, options included.
#[must_use]
pub fn ship_entry_cost(entry: &ShipEntry, catalog: &Catalog) -> u32 {
    let Some(profile) = catalog.ship(&entry.ship_profile_id) else {
        tracing::trace!("Ship profile '{}' not in catalog", entry.ship_profile_id);
        return 0;
    };

    let options: u32 = entry
        .options
        .iter()
        .filter_map(|name| profile.get_option(name))
        .map(|option| option.cost)
        .fold(0, u32::saturating_add);

    profile.cost.saturating_add(options)
}

/// Cost of every ship entry.
#[must_use]
pub fn ships_cost(roster: &Roster, catalog: &Catalog) -> u32 {
    roster
        .ships
        .iter()
        .map(|entry| ship_entry_cost(entry, catalog))
        .fold(0, u32::saturating_add)
}

/// Cost of enabled characters.
#[must_use]
pub fn characters_cost(roster: &Roster, catalog: &Catalog) -> u32 {
    roster
        .characters
        .iter()
        .filter_map(|id| catalog.character(id))
        .map(|character| character.cost)
        .fold(0, u32::saturating_add)
}

/// Cost of purchased faction special rules.
///
/// Only rules of the selected faction that carry a cost count.
#[must_use]
pub fn faction_upgrades_cost(roster: &Roster, catalog: &Catalog) -> u32 {
    let Some(faction) = roster
        .faction_id
        .as_deref()
        .and_then(|id| catalog.faction(id))
    else {
        return 0;
    };

    roster
        .faction_upgrades
        .iter()
        .filter_map(|id| faction.get_rule(id))
        .filter_map(|rule| rule.cost)
        .fold(0, u32::saturating_add)
}

/// Total Force Point cost.
#[must_use]
pub fn total_cost(roster: &Roster, catalog: &Catalog) -> u32 {
    compute_costs(roster, catalog).total_cost
}
