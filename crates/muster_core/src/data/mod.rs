//! Data structures for the rule catalog.
//!
//! This module contains pure data structures that describe factions,
//! company lists, leaders, units, ships, and characters. All structs are
//! designed to be deserialized from RON files.
//!
//! **Note:** This module contains no IO - it only defines data types.
//! Indexing lives in [`crate::catalog`].

mod character_data;
mod faction_data;
mod leader_data;
mod ship_data;
mod unit_data;

pub use character_data::{AllowedUnitTypes, Character};
pub use faction_data::{CompanyList, Faction, SpecialRule, UnitRole};
pub use leader_data::{LegendaryLeader, StandardLeader};
pub use ship_data::{ShipOption, ShipProfile};
pub use unit_data::{CombatStats, ExperienceLevel, UnitProfile, Upgrade, UpgradeCost, UpgradeKind};
