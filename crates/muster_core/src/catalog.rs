//! The read-only rule catalog.
//!
//! A [`Catalog`] indexes every record kind by id. All lookups are total:
//! they return `None` for an unknown id, and callers decide what a miss
//! means (the engines treat it as "contributes nothing").

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::{
    Character, CompanyList, Faction, LegendaryLeader, ShipProfile, SpecialRule, StandardLeader,
    UnitProfile, UnitRole,
};
use crate::error::{MusterError, Result};

/// Serialized form of a catalog: one list per record kind.
///
/// # Example RON
///
/// ```ron
/// CatalogData(
///     factions: [...],
///     company_lists: [...],
///     standard_leaders: [...],
///     legendary_leaders: [...],
///     units: [...],
///     ships: [...],
///     characters: [...],
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    /// All factions.
    #[serde(default)]
    pub factions: Vec<Faction>,
    /// All company lists.
    #[serde(default)]
    pub company_lists: Vec<CompanyList>,
    /// All standard leader types.
    #[serde(default)]
    pub standard_leaders: Vec<StandardLeader>,
    /// All legendary leaders.
    #[serde(default)]
    pub legendary_leaders: Vec<LegendaryLeader>,
    /// All unit profiles.
    #[serde(default)]
    pub units: Vec<UnitProfile>,
    /// All ship profiles.
    #[serde(default)]
    pub ships: Vec<ShipProfile>,
    /// All characters.
    #[serde(default)]
    pub characters: Vec<Character>,
}

/// Id-indexed rule catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    factions: HashMap<String, Faction>,
    company_lists: HashMap<String, CompanyList>,
    standard_leaders: HashMap<String, StandardLeader>,
    legendary_leaders: HashMap<String, LegendaryLeader>,
    units: HashMap<String, UnitProfile>,
    ships: HashMap<String, ShipProfile>,
    characters: HashMap<String, Character>,
}

fn index<T>(
    table: &'static str,
    records: Vec<T>,
    id_of: impl Fn(&T) -> &str,
) -> Result<HashMap<String, T>> {
    let mut map = HashMap::with_capacity(records.len());
    for record in records {
        let id = id_of(&record).to_string();
        if map.contains_key(&id) {
            return Err(MusterError::DuplicateId { table, id });
        }
        map.insert(id, record);
    }
    Ok(map)
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index catalog data.
    ///
    /// # Errors
    ///
    /// Returns [`MusterError::DuplicateId`] if any table repeats an id.
    pub fn from_data(data: CatalogData) -> Result<Self> {
        let catalog = Self {
            factions: index("faction", data.factions, |f| &f.id)?,
            company_lists: index("company list", data.company_lists, |c| &c.id)?,
            standard_leaders: index("standard leader", data.standard_leaders, |l| &l.id)?,
            legendary_leaders: index("legendary leader", data.legendary_leaders, |l| &l.id)?,
            units: index("unit", data.units, |u| &u.id)?,
            ships: index("ship", data.ships, |s| &s.id)?,
            characters: index("character", data.characters, |c| &c.id)?,
        };

        tracing::info!(
            "Loaded catalog with {} factions, {} company lists, {} leaders, {} legendary leaders, {} units, {} ships, {} characters",
            catalog.factions.len(),
            catalog.company_lists.len(),
            catalog.standard_leaders.len(),
            catalog.legendary_leaders.len(),
            catalog.units.len(),
            catalog.ships.len(),
            catalog.characters.len(),
        );

        Ok(catalog)
    }

    /// Parse and index a RON catalog document.
    ///
    /// `path` only labels errors; nothing is read from disk.
    ///
    /// # Errors
    ///
    /// Returns [`MusterError::DataParseError`] for malformed RON and
    /// [`MusterError::DuplicateId`] for repeated ids.
    pub fn from_ron_str(source: &str, path: &str) -> Result<Self> {
        let data: CatalogData = ron::from_str(source).map_err(|e| MusterError::DataParseError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_data(data)
    }

    /// Get a faction by id.
    #[must_use]
    pub fn faction(&self, id: &str) -> Option<&Faction> {
        self.factions.get(id)
    }

    /// Get a company list by id.
    #[must_use]
    pub fn company_list(&self, id: &str) -> Option<&CompanyList> {
        self.company_lists.get(id)
    }

    /// Get a standard leader type by id.
    #[must_use]
    pub fn standard_leader(&self, id: &str) -> Option<&StandardLeader> {
        self.standard_leaders.get(id)
    }

    /// Get a legendary leader by id.
    #[must_use]
    pub fn legendary_leader(&self, id: &str) -> Option<&LegendaryLeader> {
        self.legendary_leaders.get(id)
    }

    /// Get a unit profile by id.
    #[must_use]
    pub fn unit(&self, id: &str) -> Option<&UnitProfile> {
        self.units.get(id)
    }

    /// Get a ship profile by id.
    #[must_use]
    pub fn ship(&self, id: &str) -> Option<&ShipProfile> {
        self.ships.get(id)
    }

    /// Get a character by id.
    #[must_use]
    pub fn character(&self, id: &str) -> Option<&Character> {
        self.characters.get(id)
    }

    /// Display name of a standard leader, falling back to the raw id.
    #[must_use]
    pub fn standard_leader_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.standard_leader(id).map_or(id, |l| l.name.as_str())
    }

    /// All factions, sorted by id.
    #[must_use]
    pub fn factions(&self) -> Vec<&Faction> {
        let mut factions: Vec<_> = self.factions.values().collect();
        factions.sort_by(|a, b| a.id.cmp(&b.id));
        factions
    }

    /// All ship profiles, sorted by id.
    #[must_use]
    pub fn ships(&self) -> Vec<&ShipProfile> {
        let mut ships: Vec<_> = self.ships.values().collect();
        ships.sort_by(|a, b| a.id.cmp(&b.id));
        ships
    }

    /// All characters, sorted by id.
    #[must_use]
    pub fn characters(&self) -> Vec<&Character> {
        let mut characters: Vec<_> = self.characters.values().collect();
        characters.sort_by(|a, b| a.id.cmp(&b.id));
        characters
    }

    /// Company lists the faction may field, in the faction's order.
    ///
    /// Unknown faction or list ids yield nothing.
    #[must_use]
    pub fn company_lists_for(&self, faction_id: &str) -> Vec<&CompanyList> {
        self.faction(faction_id)
            .map(|f| {
                f.company_lists
                    .iter()
                    .filter_map(|id| self.company_list(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Standard leader types offered by a company list.
    #[must_use]
    pub fn standard_leaders_for(&self, list_id: &str) -> Vec<&StandardLeader> {
        self.company_list(list_id)
            .map(|cl| {
                cl.available_leaders
                    .iter()
                    .filter_map(|id| self.standard_leader(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Legendary leaders offered by a company list.
    #[must_use]
    pub fn legendary_leaders_for(&self, list_id: &str) -> Vec<&LegendaryLeader> {
        self.company_list(list_id)
            .map(|cl| {
                cl.available_leaders
                    .iter()
                    .filter_map(|id| self.legendary_leader(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Unit profiles a company list fields in one role.
    #[must_use]
    pub fn units_for_role(&self, list_id: &str, role: UnitRole) -> Vec<&UnitProfile> {
        self.company_list(list_id)
            .map(|cl| cl.units_in(role).iter().filter_map(|id| self.unit(id)).collect())
            .unwrap_or_default()
    }

    /// Faction special rules that can be bought.
    #[must_use]
    pub fn cost_bearing_rules(&self, faction_id: &str) -> Vec<&SpecialRule> {
        self.faction(faction_id)
            .map(|f| f.purchasable_rules().collect())
            .unwrap_or_default()
    }

    /// Validate referential integrity of the catalog.
    ///
    /// Checks for:
    /// - Faction company lists exist and point back at the faction
    /// - Company list factions, leaders, and units exist
    /// - Legendary retinue types are standard leaders
    /// - Unit model ranges are non-empty
    ///
    /// Returns a list of problems, sorted for stable output. The engines
    /// never call this; they tolerate dangling references.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for faction in self.factions.values() {
            for list_id in &faction.company_lists {
                match self.company_list(list_id) {
                    None => errors.push(format!(
                        "Faction '{}' lists unknown company list '{}'",
                        faction.id, list_id
                    )),
                    Some(list) if list.faction != faction.id => errors.push(format!(
                        "Faction '{}' lists company list '{}' which belongs to '{}'",
                        faction.id, list_id, list.faction
                    )),
                    Some(_) => {}
                }
            }
        }

        for list in self.company_lists.values() {
            if self.faction(&list.faction).is_none() {
                errors.push(format!(
                    "Company list '{}' belongs to unknown faction '{}'",
                    list.id, list.faction
                ));
            }

            for leader_id in &list.available_leaders {
                if self.standard_leader(leader_id).is_none()
                    && self.legendary_leader(leader_id).is_none()
                {
                    errors.push(format!(
                        "Company list '{}' offers unknown leader '{}'",
                        list.id, leader_id
                    ));
                }
            }

            for unit_id in list.all_units() {
                if self.unit(unit_id).is_none() {
                    errors.push(format!(
                        "Company list '{}' fields unknown unit '{}'",
                        list.id, unit_id
                    ));
                }
            }
        }

        for legendary in self.legendary_leaders.values() {
            for retinue in &legendary.allowed_retinue_types {
                if self.standard_leader(retinue).is_none() {
                    errors.push(format!(
                        "Legendary leader '{}' allows unknown retinue type '{}'",
                        legendary.id, retinue
                    ));
                }
            }
        }

        for unit in self.units.values() {
            if unit.min_models > unit.max_models {
                errors.push(format!(
                    "Unit '{}' has min_models {} above max_models {}",
                    unit.id, unit.min_models, unit.max_models
                ));
            }
        }

        errors.sort();
        errors
    }
}
