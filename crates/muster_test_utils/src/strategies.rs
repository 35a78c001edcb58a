//! Proptest strategies for roster testing.
//!
//! Rosters are generated by replaying random mutations against the fixture
//! catalog, so every generated roster is reachable through the public API.
//! Id pools deliberately include ids the catalog does not know.

use proptest::prelude::*;

use muster_core::catalog::Catalog;
use muster_core::roster::Roster;

/// Faction ids, including one the catalog lacks.
pub const FACTION_IDS: [&str; 3] = ["france", "england", "atlantis"];

/// Company list ids, including one the catalog lacks.
pub const COMPANY_LIST_IDS: [&str; 3] = ["french_army_crecy", "french_navy", "lost_list"];

/// Standard leader ids, including one the catalog lacks.
pub const LEADER_IDS: [&str; 4] = ["magnate", "noble", "knight_banneret", "hedge_knight"];

/// Legendary leader ids, including one the catalog lacks.
pub const LEGENDARY_IDS: [&str; 4] = [
    "joan_of_arc",
    "edward_black_prince",
    "free_captain",
    "arthur",
];

/// Unit profile ids, including one the catalog lacks.
pub const UNIT_IDS: [&str; 6] = [
    "footmen",
    "town_militia",
    "men_at_arms_afoot",
    "vet_men_at_arms_afoot",
    "mariners",
    "griffon_riders",
];

/// Upgrade ids across leaders and units, including unknown ones.
pub const UPGRADE_IDS: [&str; 8] = [
    "destriers",
    "plate_mail",
    "full_harness",
    "shields",
    "polearms",
    "gads",
    "wings",
    "cannon",
];

/// Ship profile ids, including one the catalog lacks.
pub const SHIP_IDS: [&str; 3] = ["cog", "rowing_boat", "flying_dutchman"];

/// Ship option names, including one no ship offers.
pub const SHIP_OPTIONS: [&str; 2] = ["Sterncastle", "Ram"];

/// Character ids, including one the catalog lacks.
pub const CHARACTER_IDS: [&str; 4] = ["grizzled_veteran", "musician", "knight_bachelor", "jester"];

/// Faction rule ids, including cost-free and unknown ones.
pub const RULE_IDS: [&str; 4] = ["oriflamme", "ordre_de_letoile", "order_of_the_garter", "no_rule"];

/// Pick one id from a pool.
pub fn arb_id(pool: &'static [&'static str]) -> impl Strategy<Value = &'static str> {
    proptest::sample::select(pool)
}

/// Pick an optional id from a pool.
pub fn arb_opt_id(pool: &'static [&'static str]) -> impl Strategy<Value = Option<&'static str>> {
    proptest::option::of(arb_id(pool))
}

/// A random subset of a pool.
pub fn arb_subset(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(pool, 0..=pool.len())
}

/// A unit to add: profile id, quantity delta, enabled upgrades.
pub fn arb_unit_plan() -> impl Strategy<Value = (&'static str, i32, Vec<&'static str>)> {
    (arb_id(&UNIT_IDS), -20i32..40, arb_subset(&UPGRADE_IDS))
}

/// A ship to add: profile id and enabled options.
pub fn arb_ship_plan() -> impl Strategy<Value = (&'static str, Vec<&'static str>)> {
    (arb_id(&SHIP_IDS), arb_subset(&SHIP_OPTIONS))
}

/// Everything needed to build one roster.
#[derive(Debug, Clone)]
pub struct RosterPlan {
    /// Faction selection.
    pub faction: Option<&'static str>,
    /// Company list selection.
    pub company_list: Option<&'static str>,
    /// Leader type selection.
    pub leader_type: Option<&'static str>,
    /// Legendary leader selection.
    pub legendary: Option<&'static str>,
    /// Requested retinue size (clamped on apply).
    pub retinue_size: u32,
    /// Force Point limit.
    pub force_points: u32,
    /// Retinue upgrades to enable.
    pub retinue_upgrades: Vec<&'static str>,
    /// Faction rules to enable.
    pub faction_upgrades: Vec<&'static str>,
    /// Characters to enable.
    pub characters: Vec<&'static str>,
    /// Units to add.
    pub units: Vec<(&'static str, i32, Vec<&'static str>)>,
    /// Ships to add.
    pub ships: Vec<(&'static str, Vec<&'static str>)>,
}

impl RosterPlan {
    /// Replay the plan through the roster's mutation API.
    #[must_use]
    pub fn apply(&self, catalog: &Catalog) -> Roster {
        let mut roster = Roster::new();
        roster.select_faction(self.faction);
        roster.select_company_list(self.company_list);
        roster.select_leader_type(self.leader_type);
        roster.select_legendary_leader(self.legendary);
        roster.set_retinue_size(self.retinue_size);
        roster.set_force_point_limit(self.force_points);

        for id in &self.retinue_upgrades {
            roster.toggle_retinue_upgrade(id, true);
        }
        for id in &self.faction_upgrades {
            roster.toggle_faction_upgrade(id, true);
        }
        for id in &self.characters {
            roster.toggle_character(id, true);
        }
        for (unit_id, delta, upgrades) in &self.units {
            if let Some(entry) = roster.add_unit(catalog, unit_id) {
                roster.change_unit_quantity(catalog, entry, *delta);
                for upgrade in upgrades {
                    roster.toggle_unit_upgrade(entry, upgrade, true);
                }
            }
        }
        for (ship_id, options) in &self.ships {
            let entry = roster.add_ship(ship_id);
            for option in options {
                roster.toggle_ship_option(entry, option, true);
            }
        }

        roster
    }
}

/// Generate a roster plan.
pub fn arb_roster_plan() -> impl Strategy<Value = RosterPlan> {
    (
        (
            arb_opt_id(&FACTION_IDS),
            arb_opt_id(&COMPANY_LIST_IDS),
            arb_opt_id(&LEADER_IDS),
            arb_opt_id(&LEGENDARY_IDS),
            0u32..10,
            0u32..600,
        ),
        (
            arb_subset(&UPGRADE_IDS),
            arb_subset(&RULE_IDS),
            arb_subset(&CHARACTER_IDS),
            proptest::collection::vec(arb_unit_plan(), 0..10),
            proptest::collection::vec(arb_ship_plan(), 0..3),
        ),
    )
        .prop_map(
            |(
                (faction, company_list, leader_type, legendary, retinue_size, force_points),
                (retinue_upgrades, faction_upgrades, characters, units, ships),
            )| RosterPlan {
                faction,
                company_list,
                leader_type,
                legendary,
                retinue_size,
                force_points,
                retinue_upgrades,
                faction_upgrades,
                characters,
                units,
                ships,
            },
        )
}
