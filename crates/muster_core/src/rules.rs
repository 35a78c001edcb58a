//! Fixed numbers from the rulebook.

use std::ops::RangeInclusive;

/// Legal retinue sizes.
pub const RETINUE_SIZE: RangeInclusive<u32> = 3..=6;

/// Retinue size of a fresh roster.
pub const DEFAULT_RETINUE_SIZE: u32 = 3;

/// Force Point limit of a fresh roster.
pub const DEFAULT_FORCE_POINTS: u32 = 200;

/// Name of a fresh roster.
pub const DEFAULT_COMPANY_NAME: &str = "My Company";

/// Fewest Main Battle units a legal Company may field.
pub const MIN_MAIN_BATTLE: usize = 2;

/// One Vanguard unit is allowed per this many Main Battle units.
pub const MAIN_BATTLE_PER_VANGUARD: usize = 2;

/// One Reserve unit is allowed per this many Main Battle units.
pub const MAIN_BATTLE_PER_RESERVE: usize = 3;

/// Remaining budget at or below which the roster is flagged as nearly full.
pub const NEAR_LIMIT_THRESHOLD: u32 = 20;

/// Unit profiles that only make sense aboard a ship.
pub const NAVAL_UNITS: [&str; 3] = ["mariners", "able_seamen", "ships_boys"];

/// Special rule marking small craft.
pub const BOAT_RULE: &str = "Boat";

/// Character id capped per 100 Force Points.
pub const GRIZZLED_VETERAN: &str = "grizzled_veteran";

/// Force Points that buy one Grizzled Veteran.
pub const GRIZZLED_VETERAN_FP_PER: u32 = 100;

/// Check whether a unit profile id is a naval unit.
#[must_use]
pub fn is_naval_unit(unit_id: &str) -> bool {
    NAVAL_UNITS.contains(&unit_id)
}
