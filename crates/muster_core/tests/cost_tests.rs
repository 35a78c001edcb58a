//! Cost engine and roster mutation tests against the fixture catalog.

use muster_core::catalog::Catalog;
use muster_core::cost::{
    characters_cost, compute_costs, faction_upgrades_cost, legendary_cost, retinue_cost,
    ship_entry_cost, ships_cost, total_cost, unit_entry_cost, units_cost,
};
use muster_core::data::UnitRole;
use muster_core::roster::{Roster, UnitEntry, UnitEntryId};
use muster_core::validation::validate;
use muster_test_utils::fixtures::{
    add_units, ready_roster, test_catalog, COMPANY_LIST, FACTION, MAIN_BATTLE_UNIT, VANGUARD_UNIT,
};
use muster_test_utils::proptest::prelude::*;
use muster_test_utils::strategies::arb_roster_plan;

// ==========================================================================
// Cost categories
// ==========================================================================

#[test]
fn legendary_is_charged_on_top_of_the_retinue() {
    let catalog = test_catalog();
    let mut roster = ready_roster("noble");
    let without = compute_costs(&roster, &catalog);

    roster.select_legendary_leader(Some("joan_of_arc"));
    let with = compute_costs(&roster, &catalog);

    assert_eq!(without.retinue_cost, 27);
    assert_eq!(with.retinue_cost, 27);
    assert_eq!(with.legendary_cost, 30);
    assert_eq!(with.total_cost, 57);
}

#[test]
fn legendary_without_leader_type_costs_only_itself() {
    let catalog = test_catalog();
    let mut roster = ready_roster("noble");
    roster.select_leader_type(None);
    roster.select_legendary_leader(Some("free_captain"));

    let costs = compute_costs(&roster, &catalog);
    assert_eq!(costs.retinue_cost, 0);
    assert_eq!(costs.total_cost, 5);
}

#[test]
fn full_breakdown() {
    let catalog = test_catalog();
    let mut roster = ready_roster("magnate");
    roster.set_retinue_size(5);
    roster.toggle_retinue_upgrade("destriers", true);
    roster.toggle_faction_upgrade("ordre_de_letoile", true);
    roster.toggle_character("musician", true);
    roster.toggle_character("knight_bachelor", true);

    let footmen = add_units(&mut roster, &catalog, MAIN_BATTLE_UNIT, 1)[0];
    roster.change_unit_quantity(&catalog, footmen, 2);
    roster.toggle_unit_upgrade(footmen, "shields", true);
    roster.toggle_unit_upgrade(footmen, "polearms", true);

    let cog = roster.add_ship("cog");
    roster.toggle_ship_option(cog, "Sterncastle", true);

    let costs = compute_costs(&roster, &catalog);
    assert_eq!(costs.retinue_cost, 11 * 5 + 5 * 5);
    assert_eq!(costs.legendary_cost, 0);
    assert_eq!(costs.units_cost, 5 * 6 + 6 + 4);
    assert_eq!(costs.ships_cost, 50);
    assert_eq!(costs.characters_cost, 8);
    assert_eq!(costs.faction_upgrades_cost, 7);
    assert_eq!(costs.total_cost, 80 + 40 + 50 + 8 + 7);
}

#[test]
fn disabling_toggles_removes_their_cost() {
    let catalog = test_catalog();
    let mut roster = ready_roster("noble");
    roster.toggle_retinue_upgrade("plate_mail", true);
    roster.toggle_character("musician", true);
    assert_eq!(retinue_cost(&roster, &catalog), 33);
    assert_eq!(characters_cost(&roster, &catalog), 3);

    roster.toggle_retinue_upgrade("plate_mail", false);
    roster.toggle_character("musician", false);
    assert_eq!(retinue_cost(&roster, &catalog), 27);
    assert_eq!(characters_cost(&roster, &catalog), 0);
}

#[test]
fn another_factions_rule_is_not_charged() {
    let catalog = test_catalog();
    let mut roster = ready_roster("noble");
    roster.toggle_faction_upgrade("order_of_the_garter", true);
    assert_eq!(faction_upgrades_cost(&roster, &catalog), 0);
}

// ==========================================================================
// Unresolvable references
// ==========================================================================

#[test]
fn unknown_ids_contribute_nothing_and_do_not_panic() {
    let catalog = test_catalog();
    let mut roster = ready_roster("noble");
    roster.units.push(UnitEntry {
        id: UnitEntryId(99),
        unit_profile_id: "griffon_riders".to_string(),
        quantity: 10,
        upgrades: ["wings".to_string()].into_iter().collect(),
    });
    let ship = roster.add_ship("flying_dutchman");
    roster.toggle_ship_option(ship, "Sterncastle", true);
    roster.toggle_character("jester", true);
    roster.select_legendary_leader(Some("arthur"));

    assert_eq!(unit_entry_cost(&roster.units[0], &catalog), 0);
    assert_eq!(ship_entry_cost(roster.ship(ship).unwrap(), &catalog), 0);
    assert_eq!(characters_cost(&roster, &catalog), 0);
    assert_eq!(legendary_cost(&roster, &catalog), 0);
    assert_eq!(compute_costs(&roster, &catalog).total_cost, 27);

    let report = validate(&roster, &catalog);
    assert!(report
        .errors
        .contains(&muster_core::validation::RosterError::TooFewMainBattle { count: 0 }));
}

#[test]
fn unknown_leader_type_costs_nothing() {
    let catalog = test_catalog();
    let mut roster = ready_roster("hedge_knight");
    roster.toggle_retinue_upgrade("plate_mail", true);
    assert_eq!(retinue_cost(&roster, &catalog), 0);
}

// ==========================================================================
// Roster mutations
// ==========================================================================

#[test]
fn quantity_swing_settles_on_minimum() {
    let catalog = test_catalog();
    let mut roster = ready_roster("noble");
    let id = add_units(&mut roster, &catalog, MAIN_BATTLE_UNIT, 1)[0];

    roster.change_unit_quantity(&catalog, id, 1000);
    roster.change_unit_quantity(&catalog, id, -1000);
    assert_eq!(roster.unit(id).unwrap().quantity, 4);
}

#[test]
fn repeated_increase_never_exceeds_maximum() {
    let catalog = test_catalog();
    let mut roster = ready_roster("noble");
    let id = add_units(&mut roster, &catalog, VANGUARD_UNIT, 1)[0];

    for _ in 0..20 {
        roster.change_unit_quantity(&catalog, id, 1);
        assert!(roster.unit(id).unwrap().quantity <= 6);
    }
    assert_eq!(roster.unit(id).unwrap().quantity, 6);
}

#[test]
fn new_faction_clears_dependent_selections() {
    let catalog = test_catalog();
    let mut roster = ready_roster("noble");
    roster.select_legendary_leader(Some("joan_of_arc"));
    roster.toggle_retinue_upgrade("plate_mail", true);
    roster.toggle_faction_upgrade("ordre_de_letoile", true);
    add_units(&mut roster, &catalog, MAIN_BATTLE_UNIT, 2);

    roster.select_faction(Some("england"));

    assert_eq!(roster.faction_id.as_deref(), Some("england"));
    assert!(roster.company_list_id.is_none());
    assert!(roster.leader_type_id.is_none());
    assert!(roster.legendary_leader_id.is_none());
    assert!(roster.units.is_empty());
    assert!(roster.retinue_upgrades.is_empty());
    assert!(roster.faction_upgrades.is_empty());
}

fn leader_name(roster: &Roster, catalog: &Catalog) -> Option<String> {
    roster.active_leader(catalog).map(|l| l.name().to_string())
}

#[test]
fn active_leader_prefers_legendary() {
    let catalog = test_catalog();
    let mut roster = ready_roster("noble");
    assert_eq!(leader_name(&roster, &catalog).as_deref(), Some("Noble"));

    roster.select_legendary_leader(Some("joan_of_arc"));
    assert_eq!(leader_name(&roster, &catalog).as_deref(), Some("Joan of Arc"));

    roster.select_legendary_leader(Some("arthur"));
    assert_eq!(leader_name(&roster, &catalog).as_deref(), Some("Noble"));

    assert!(Roster::new().active_leader(&catalog).is_none());
}

#[test]
fn catalog_queries_follow_selection() {
    let catalog = test_catalog();
    let lists: Vec<_> = catalog
        .company_lists_for(FACTION)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(lists, [COMPANY_LIST, "french_navy"]);

    let legendary: Vec<_> = catalog
        .legendary_leaders_for(COMPANY_LIST)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(legendary, ["joan_of_arc"]);

    let rules: Vec<_> = catalog
        .cost_bearing_rules(FACTION)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(rules, ["ordre_de_letoile"]);

    let main_battle: Vec<_> = catalog
        .units_for_role(COMPANY_LIST, UnitRole::MainBattle)
        .iter()
        .map(|u| u.id.as_str())
        .collect();
    assert_eq!(main_battle, [MAIN_BATTLE_UNIT, "town_militia"]);

    let vanguard: Vec<_> = catalog
        .units_for_role(COMPANY_LIST, UnitRole::Vanguard)
        .iter()
        .map(|u| u.id.as_str())
        .collect();
    assert_eq!(vanguard, [VANGUARD_UNIT]);

    assert!(catalog.units_for_role("french_navy", UnitRole::Reserve).is_empty());
    assert!(catalog.units_for_role("unknown_list", UnitRole::MainBattle).is_empty());
}

// ==========================================================================
// Properties
// ==========================================================================

proptest! {
    /// The total equals the independently computed categories, and the
    /// unit and ship categories equal their per-entry sums.
    #[test]
    fn prop_total_is_sum_of_categories(plan in arb_roster_plan()) {
        let catalog = test_catalog();
        let roster = plan.apply(&catalog);

        let units: u32 = roster.units.iter().map(|u| unit_entry_cost(u, &catalog)).sum();
        let ships: u32 = roster.ships.iter().map(|s| ship_entry_cost(s, &catalog)).sum();
        prop_assert_eq!(units_cost(&roster, &catalog), units);
        prop_assert_eq!(ships_cost(&roster, &catalog), ships);

        let categories = retinue_cost(&roster, &catalog)
            + legendary_cost(&roster, &catalog)
            + units
            + ships
            + characters_cost(&roster, &catalog)
            + faction_upgrades_cost(&roster, &catalog);
        prop_assert_eq!(total_cost(&roster, &catalog), categories);
        prop_assert_eq!(compute_costs(&roster, &catalog).total_cost, categories);
    }

    /// Reachable rosters keep unit sizes inside the profile range.
    #[test]
    fn prop_unit_quantities_stay_in_range(plan in arb_roster_plan()) {
        let catalog = test_catalog();
        let roster = plan.apply(&catalog);

        for entry in &roster.units {
            let profile = catalog.unit(&entry.unit_profile_id).unwrap();
            prop_assert!(entry.quantity >= profile.min_models);
            prop_assert!(entry.quantity <= profile.max_models);
        }
        prop_assert!((3..=6).contains(&roster.retinue_size));
    }

    /// Validation is deterministic and a missing prerequisite is the only error.
    #[test]
    fn prop_validation_is_stable(plan in arb_roster_plan()) {
        let catalog = test_catalog();
        let roster = plan.apply(&catalog);
        let first = validate(&roster, &catalog);
        prop_assert_eq!(&first, &validate(&roster, &catalog));

        if roster.faction_id.is_none() {
            prop_assert_eq!(first.errors.len(), 1);
            prop_assert!(first.warnings.is_empty());
        }
    }
}
