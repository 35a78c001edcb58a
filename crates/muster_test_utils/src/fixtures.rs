//! Test fixtures and helpers.
//!
//! A small hand-built catalog with round numbers, and roster helpers that
//! get a Company past the selection prerequisites.

use muster_core::catalog::{Catalog, CatalogData};
use muster_core::data::{
    AllowedUnitTypes, Character, CombatStats, CompanyList, ExperienceLevel, Faction,
    LegendaryLeader, ShipOption, ShipProfile, SpecialRule, StandardLeader, UnitProfile, Upgrade,
    UpgradeCost, UpgradeKind,
};
use muster_core::roster::{Roster, UnitEntryId};

/// Faction used by [`ready_roster`].
pub const FACTION: &str = "france";

/// Company list used by [`ready_roster`].
pub const COMPANY_LIST: &str = "french_army_crecy";

/// Company list whose Main Battle includes naval units.
pub const NAVAL_LIST: &str = "french_navy";

/// Main Battle unit: 5 FP per model, 4 to 12 models.
pub const MAIN_BATTLE_UNIT: &str = "footmen";

/// Main Battle unit priced at 1 FP per model, 1 to 200 models, for hitting
/// exact totals.
pub const MILITIA: &str = "town_militia";

/// Vanguard unit: 7 FP per model, 3 to 6 models.
pub const VANGUARD_UNIT: &str = "men_at_arms_afoot";

/// Reserve unit: 9 FP per model, 3 to 6 models.
pub const RESERVE_UNIT: &str = "vet_men_at_arms_afoot";

fn upgrade(id: &str, cost: UpgradeCost) -> Upgrade {
    Upgrade {
        id: id.to_string(),
        name: id.replace('_', " "),
        kind: match cost {
            UpgradeCost::PerModel(_) => UpgradeKind::Model,
            UpgradeCost::Flat(_) => UpgradeKind::Unit,
        },
        cost,
        description: String::new(),
    }
}

fn rule(id: &str, name: &str, cost: Option<u32>) -> SpecialRule {
    SpecialRule {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        cost,
        restriction: None,
    }
}

fn leader(id: &str, name: &str, cost_per_model: u32) -> StandardLeader {
    StandardLeader {
        id: id.to_string(),
        name: name.to_string(),
        cost_per_model,
        stats: CombatStats {
            shoot: "-/5".to_string(),
            melee: "5/5".to_string(),
            resolve: 4,
        },
        command_points: 2,
        command_range: "6\"".to_string(),
        experience: ExperienceLevel::Veteran,
        upgrades: vec![
            upgrade("destriers", UpgradeCost::PerModel(5)),
            upgrade("plate_mail", UpgradeCost::Flat(6)),
            upgrade("full_harness", UpgradeCost::Flat(10)),
        ],
        special_rules: vec!["Prize".to_string()],
        sea_battle_only: false,
        composition: None,
    }
}

fn legendary(id: &str, name: &str, cost: u32, allowed: &[&str]) -> LegendaryLeader {
    LegendaryLeader {
        id: id.to_string(),
        name: name.to_string(),
        cost,
        allowed_retinue_types: allowed.iter().map(ToString::to_string).collect(),
        ability: String::new(),
        special_rules: vec!["Prize".to_string()],
    }
}

fn unit(id: &str, cost_per_model: u32, min: u32, max: u32, upgrades: Vec<Upgrade>) -> UnitProfile {
    UnitProfile {
        id: id.to_string(),
        name: id.replace('_', " "),
        cost_per_model,
        min_models: min,
        max_models: max,
        experience: ExperienceLevel::Trained,
        arms: "Standard Melee Weapon".to_string(),
        stats: CombatStats {
            shoot: "-/6".to_string(),
            melee: "6/6".to_string(),
            resolve: 6,
        },
        special_rules: vec![],
        upgrades,
        notes: None,
    }
}

fn ship(id: &str, cost: u32, boat: bool) -> ShipProfile {
    ShipProfile {
        id: id.to_string(),
        name: id.replace('_', " "),
        cost,
        size: if boat { 1 } else { 3 },
        hull_save: "5+".to_string(),
        draft: "Deep".to_string(),
        top_speed: "8\"".to_string(),
        special_rules: if boat { vec!["Boat".to_string()] } else { vec![] },
        options: vec![ShipOption {
            name: "Sterncastle".to_string(),
            cost: 10,
        }],
    }
}

fn character(id: &str, cost: u32, allowed: AllowedUnitTypes) -> Character {
    Character {
        id: id.to_string(),
        name: id.replace('_', " "),
        cost,
        restrictions: String::new(),
        allowed_unit_types: Some(allowed),
        special_rules: vec![],
        command_points: 0,
        command_range: None,
    }
}

/// Raw data behind [`test_catalog`].
#[must_use]
pub fn test_catalog_data() -> CatalogData {
    CatalogData {
        factions: vec![
            Faction {
                id: FACTION.to_string(),
                name: "France".to_string(),
                description: String::new(),
                special_rules: vec![
                    rule("oriflamme", "Oriflamme", None),
                    rule("ordre_de_letoile", "Ordre de l'Étoile", Some(7)),
                ],
                company_lists: vec![COMPANY_LIST.to_string(), NAVAL_LIST.to_string()],
            },
            Faction {
                id: "england".to_string(),
                name: "England".to_string(),
                description: String::new(),
                special_rules: vec![rule("order_of_the_garter", "Order of the Garter", Some(5))],
                company_lists: vec![],
            },
        ],
        company_lists: vec![
            CompanyList {
                id: COMPANY_LIST.to_string(),
                name: "French Army, Crecy to Poitiers".to_string(),
                faction: FACTION.to_string(),
                subtitle: "1345-56".to_string(),
                available_leaders: vec![
                    "magnate".to_string(),
                    "noble".to_string(),
                    "knight_banneret".to_string(),
                    "joan_of_arc".to_string(),
                ],
                main_battle: vec![MAIN_BATTLE_UNIT.to_string(), MILITIA.to_string()],
                vanguard: vec![VANGUARD_UNIT.to_string()],
                reserve: vec![RESERVE_UNIT.to_string()],
                special_rules: vec![],
                notes: None,
            },
            CompanyList {
                id: NAVAL_LIST.to_string(),
                name: "French Navy".to_string(),
                faction: FACTION.to_string(),
                subtitle: String::new(),
                available_leaders: vec!["noble".to_string()],
                main_battle: vec!["mariners".to_string(), MAIN_BATTLE_UNIT.to_string()],
                vanguard: vec![],
                reserve: vec![],
                special_rules: vec![],
                notes: None,
            },
        ],
        standard_leaders: vec![
            leader("magnate", "Magnate", 11),
            leader("noble", "Noble", 9),
            leader("knight_banneret", "Knight Banneret", 7),
        ],
        legendary_leaders: vec![
            legendary("joan_of_arc", "Joan of Arc", 30, &["noble"]),
            legendary("edward_black_prince", "Edward The Black Prince", 10, &["magnate"]),
            legendary("free_captain", "Free Captain", 5, &[]),
        ],
        units: vec![
            unit(
                MAIN_BATTLE_UNIT,
                5,
                4,
                12,
                vec![
                    upgrade("shields", UpgradeCost::PerModel(1)),
                    upgrade("polearms", UpgradeCost::Flat(4)),
                ],
            ),
            unit(MILITIA, 1, 1, 200, vec![]),
            unit(VANGUARD_UNIT, 7, 3, 6, vec![upgrade("plate_mail", UpgradeCost::Flat(6))]),
            unit(RESERVE_UNIT, 9, 3, 6, vec![]),
            unit("mariners", 3, 3, 12, vec![upgrade("gads", UpgradeCost::Flat(4))]),
        ],
        ships: vec![ship("cog", 40, false), ship("rowing_boat", 5, true)],
        characters: vec![
            character("grizzled_veteran", 9, AllowedUnitTypes::Any),
            character("musician", 3, AllowedUnitTypes::Retinue),
            character("knight_bachelor", 5, AllowedUnitTypes::NonRetinue),
        ],
    }
}

/// A small, internally consistent catalog.
#[must_use]
pub fn test_catalog() -> Catalog {
    match Catalog::from_data(test_catalog_data()) {
        Ok(catalog) => catalog,
        Err(e) => panic!("fixture catalog is invalid: {e}"),
    }
}

/// A roster with [`FACTION`], [`COMPANY_LIST`], and `leader_type` selected
/// and nothing else.
#[must_use]
pub fn ready_roster(leader_type: &str) -> Roster {
    let mut roster = Roster::new();
    roster.select_faction(Some(FACTION));
    roster.select_company_list(Some(COMPANY_LIST));
    roster.select_leader_type(Some(leader_type));
    roster
}

/// Add `count` units of one profile, each at minimum size.
pub fn add_units(
    roster: &mut Roster,
    catalog: &Catalog,
    unit_profile_id: &str,
    count: usize,
) -> Vec<UnitEntryId> {
    (0..count)
        .filter_map(|_| roster.add_unit(catalog, unit_profile_id))
        .collect()
}

/// Set a unit's quantity directly, going through the clamped mutation.
pub fn set_quantity(roster: &mut Roster, catalog: &Catalog, id: UnitEntryId, quantity: u32) {
    let current = roster.unit(id).map_or(0, |u| u.quantity);
    let delta = i64::from(quantity) - i64::from(current);
    roster.change_unit_quantity(catalog, id, i32::try_from(delta).unwrap_or(i32::MAX));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_catalog_is_consistent() {
        let catalog = test_catalog();
        assert!(catalog.validate().is_empty(), "{:?}", catalog.validate());
    }

    #[test]
    fn test_ready_roster_selects_prerequisites() {
        let roster = ready_roster("noble");
        assert_eq!(roster.faction_id.as_deref(), Some(FACTION));
        assert_eq!(roster.company_list_id.as_deref(), Some(COMPANY_LIST));
        assert_eq!(roster.leader_type_id.as_deref(), Some("noble"));
    }
}
