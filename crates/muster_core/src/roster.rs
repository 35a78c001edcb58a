//! The editable Company roster.
//!
//! Every mutation is total: unknown ids are ignored, sizes are clamped,
//! and selections cascade-clear whatever depended on them. No cost or
//! validation logic lives here; see [`crate::cost`] and
//! [`crate::validation`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::data::{LegendaryLeader, StandardLeader};
use crate::rules;

/// Identifier of a unit entry within one roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitEntryId(pub u32);

/// Identifier of a ship entry within one roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipEntryId(pub u32);

/// A unit the player has added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitEntry {
    /// Roster-local identifier.
    pub id: UnitEntryId,
    /// Catalog unit profile id.
    pub unit_profile_id: String,
    /// Number of models.
    pub quantity: u32,
    /// Enabled upgrade ids.
    #[serde(default)]
    pub upgrades: BTreeSet<String>,
}

/// A ship the player has added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipEntry {
    /// Roster-local identifier.
    pub id: ShipEntryId,
    /// Catalog ship profile id.
    pub ship_profile_id: String,
    /// Enabled option names.
    #[serde(default)]
    pub options: BTreeSet<String>,
}

/// The leader shown at the head of the Company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLeader<'a> {
    /// A generic leader type.
    Standard(&'a StandardLeader),
    /// A named leader, leading a standard retinue.
    Legendary(&'a LegendaryLeader),
}

impl ActiveLeader<'_> {
    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Standard(leader) => &leader.name,
            Self::Legendary(leader) => &leader.name,
        }
    }
}

/// Add or remove `id` from an enabled-id set.
fn set_enabled(set: &mut BTreeSet<String>, id: &str, enabled: bool) {
    if enabled {
        set.insert(id.to_string());
    } else {
        set.remove(id);
    }
}

/// The player's Company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Force Point budget.
    #[serde(default = "default_force_points")]
    pub force_point_limit: u32,
    /// Selected faction.
    #[serde(default)]
    pub faction_id: Option<String>,
    /// Selected company list.
    #[serde(default)]
    pub company_list_id: Option<String>,
    /// Standard leader type backing the retinue.
    #[serde(default)]
    pub leader_type_id: Option<String>,
    /// Legendary leader heading the retinue.
    #[serde(default)]
    pub legendary_leader_id: Option<String>,
    /// Retinue models, within [`rules::RETINUE_SIZE`].
    #[serde(default = "default_retinue_size")]
    pub retinue_size: u32,
    /// Enabled retinue upgrade ids.
    #[serde(default)]
    pub retinue_upgrades: BTreeSet<String>,
    /// Enabled faction special-rule ids.
    #[serde(default)]
    pub faction_upgrades: BTreeSet<String>,
    /// Units in insertion order.
    #[serde(default)]
    pub units: Vec<UnitEntry>,
    /// Ships in insertion order.
    #[serde(default)]
    pub ships: Vec<ShipEntry>,
    /// Enabled character ids.
    #[serde(default)]
    pub characters: BTreeSet<String>,
    /// Cosmetic name.
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default = "first_entry_id")]
    next_unit_id: u32,
    #[serde(default = "first_entry_id")]
    next_ship_id: u32,
}

fn default_force_points() -> u32 {
    rules::DEFAULT_FORCE_POINTS
}

fn default_retinue_size() -> u32 {
    rules::DEFAULT_RETINUE_SIZE
}

fn default_company_name() -> String {
    rules::DEFAULT_COMPANY_NAME.to_string()
}

const fn first_entry_id() -> u32 {
    1
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            force_point_limit: rules::DEFAULT_FORCE_POINTS,
            faction_id: None,
            company_list_id: None,
            leader_type_id: None,
            legendary_leader_id: None,
            retinue_size: rules::DEFAULT_RETINUE_SIZE,
            retinue_upgrades: BTreeSet::new(),
            faction_upgrades: BTreeSet::new(),
            units: Vec::new(),
            ships: Vec::new(),
            characters: BTreeSet::new(),
            company_name: rules::DEFAULT_COMPANY_NAME.to_string(),
            next_unit_id: first_entry_id(),
            next_ship_id: first_entry_id(),
        }
    }
}

impl Roster {
    /// Create an empty roster with default limit, retinue size, and name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a faction. Clears the company list, both leaders, units,
    /// retinue upgrades, and faction upgrades.
    pub fn select_faction(&mut self, faction_id: Option<&str>) {
        self.faction_id = faction_id.map(str::to_string);
        self.company_list_id = None;
        self.leader_type_id = None;
        self.legendary_leader_id = None;
        self.units.clear();
        self.retinue_upgrades.clear();
        self.faction_upgrades.clear();
    }

    /// Select a company list. Clears both leaders and units.
    pub fn select_company_list(&mut self, list_id: Option<&str>) {
        self.company_list_id = list_id.map(str::to_string);
        self.leader_type_id = None;
        self.legendary_leader_id = None;
        self.units.clear();
    }

    /// Select the standard leader type. Clears retinue upgrades and the
    /// legendary leader.
    pub fn select_leader_type(&mut self, leader_id: Option<&str>) {
        self.leader_type_id = leader_id.map(str::to_string);
        self.retinue_upgrades.clear();
        self.legendary_leader_id = None;
    }

    /// Select the legendary leader.
    pub fn select_legendary_leader(&mut self, legendary_id: Option<&str>) {
        self.legendary_leader_id = legendary_id.map(str::to_string);
    }

    /// Set the retinue size, clamped to [`rules::RETINUE_SIZE`].
    pub fn set_retinue_size(&mut self, size: u32) {
        self.retinue_size = size.clamp(*rules::RETINUE_SIZE.start(), *rules::RETINUE_SIZE.end());
    }

    /// Set the Force Point budget. Any value is accepted; overspending is
    /// reported by validation.
    pub fn set_force_point_limit(&mut self, limit: u32) {
        self.force_point_limit = limit;
    }

    /// Rename the Company.
    pub fn set_company_name(&mut self, name: impl Into<String>) {
        self.company_name = name.into();
    }

    /// Enable or disable a retinue upgrade.
    pub fn toggle_retinue_upgrade(&mut self, upgrade_id: &str, enabled: bool) {
        set_enabled(&mut self.retinue_upgrades, upgrade_id, enabled);
    }

    /// Enable or disable a faction special-rule purchase.
    pub fn toggle_faction_upgrade(&mut self, rule_id: &str, enabled: bool) {
        set_enabled(&mut self.faction_upgrades, rule_id, enabled);
    }

    /// Enable or disable a character.
    pub fn toggle_character(&mut self, character_id: &str, enabled: bool) {
        set_enabled(&mut self.characters, character_id, enabled);
    }

    /// Add a unit at its minimum size.
    ///
    /// Returns `None` and adds nothing if the profile is not in the catalog.
    pub fn add_unit(&mut self, catalog: &Catalog, unit_profile_id: &str) -> Option<UnitEntryId> {
        let Some(profile) = catalog.unit(unit_profile_id) else {
            tracing::debug!("Ignoring unknown unit profile '{unit_profile_id}'");
            return None;
        };

        let id = self.allocate_unit_id();
        self.units.push(UnitEntry {
            id,
            unit_profile_id: unit_profile_id.to_string(),
            quantity: profile.min_models,
            upgrades: BTreeSet::new(),
        });
        Some(id)
    }

    /// Remove a unit entry.
    pub fn remove_unit(&mut self, id: UnitEntryId) {
        self.units.retain(|u| u.id != id);
    }

    /// Get a unit entry by id.
    #[must_use]
    pub fn unit(&self, id: UnitEntryId) -> Option<&UnitEntry> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Change a unit's model count by `delta`, clamped to the profile's
    /// legal range. Unknown entries and unresolvable profiles are left alone.
    pub fn change_unit_quantity(&mut self, catalog: &Catalog, id: UnitEntryId, delta: i32) {
        let Some(unit) = self.units.iter_mut().find(|u| u.id == id) else {
            return;
        };
        let Some(profile) = catalog.unit(&unit.unit_profile_id) else {
            return;
        };
        unit.quantity = profile.clamp_models(i64::from(unit.quantity) + i64::from(delta));
    }

    /// Enable or disable an upgrade on one unit.
    pub fn toggle_unit_upgrade(&mut self, id: UnitEntryId, upgrade_id: &str, enabled: bool) {
        if let Some(unit) = self.units.iter_mut().find(|u| u.id == id) {
            set_enabled(&mut unit.upgrades, upgrade_id, enabled);
        }
    }

    /// Add a ship. The profile id is not checked; an unknown ship costs
    /// nothing.
    pub fn add_ship(&mut self, ship_profile_id: &str) -> ShipEntryId {
        let id = self.allocate_ship_id();
        self.ships.push(ShipEntry {
            id,
            ship_profile_id: ship_profile_id.to_string(),
            options: BTreeSet::new(),
        });
        id
    }

    /// Remove a ship entry.
    pub fn remove_ship(&mut self, id: ShipEntryId) {
        self.ships.retain(|s| s.id != id);
    }

    /// Get a ship entry by id.
    #[must_use]
    pub fn ship(&self, id: ShipEntryId) -> Option<&ShipEntry> {
        self.ships.iter().find(|s| s.id == id)
    }

    /// Enable or disable a named option on one ship.
    pub fn toggle_ship_option(&mut self, id: ShipEntryId, option_name: &str, enabled: bool) {
        if let Some(ship) = self.ships.iter_mut().find(|s| s.id == id) {
            set_enabled(&mut ship.options, option_name, enabled);
        }
    }

    /// Clear units, ships, characters, upgrades, and the legendary leader.
    ///
    /// Faction, company list, leader type, budget, retinue size, and name
    /// are kept. Entry ids are not recycled.
    pub fn reset(&mut self) {
        self.units.clear();
        self.ships.clear();
        self.characters.clear();
        self.retinue_upgrades.clear();
        self.faction_upgrades.clear();
        self.legendary_leader_id = None;
    }

    /// Bring a deserialized roster back inside the ranges the mutations
    /// maintain: retinue size into [`rules::RETINUE_SIZE`] and each unit's
    /// quantity into its profile's range. Units whose profile is unknown are
    /// left alone.
    pub fn normalize(&mut self, catalog: &Catalog) {
        self.set_retinue_size(self.retinue_size);
        for unit in &mut self.units {
            if let Some(profile) = catalog.unit(&unit.unit_profile_id) {
                let quantity = profile.clamp_models(i64::from(unit.quantity));
                if quantity != unit.quantity {
                    tracing::debug!(
                        "Clamped '{}' from {} to {} models",
                        unit.unit_profile_id,
                        unit.quantity,
                        quantity
                    );
                    unit.quantity = quantity;
                }
            }
        }
    }

    /// The leader heading the Company: the legendary leader when one is
    /// selected and known, otherwise the standard leader type.
    #[must_use]
    pub fn active_leader<'a>(&self, catalog: &'a Catalog) -> Option<ActiveLeader<'a>> {
        self.legendary_leader_id
            .as_deref()
            .and_then(|id| catalog.legendary_leader(id))
            .map(ActiveLeader::Legendary)
            .or_else(|| {
                self.leader_type_id
                    .as_deref()
                    .and_then(|id| catalog.standard_leader(id))
                    .map(ActiveLeader::Standard)
            })
    }

    // Counters skip past any id already present, so rosters loaded from
    // files without counters never hand out a duplicate.
    fn allocate_unit_id(&mut self) -> UnitEntryId {
        let floor = self.units.iter().map(|u| u.id.0 + 1).max().unwrap_or(0);
        let id = self.next_unit_id.max(floor);
        self.next_unit_id = id + 1;
        UnitEntryId(id)
    }

    fn allocate_ship_id(&mut self) -> ShipEntryId {
        let floor = self.ships.iter().map(|s| s.id.0 + 1).max().unwrap_or(0);
        let id = self.next_ship_id.max(floor);
        self.next_ship_id = id + 1;
        ShipEntryId(id)
    }
}
