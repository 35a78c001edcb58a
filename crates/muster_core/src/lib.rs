//! # Muster Core
//!
//! Force builder core for Blood & Crowns companies.
//!
//! This crate contains **only** pure logic:
//! - No rendering
//! - No file IO (catalogs arrive as RON strings or already-built data)
//! - No hidden state beyond the roster being evaluated
//!
//! A presentation layer mutates a [`roster::Roster`], then calls
//! [`evaluation::evaluate`] (or the individual cost and validation
//! functions) against a read-only [`catalog::Catalog`] and redraws from the
//! result.
//!
//! ## Crate Structure
//!
//! - [`data`] - Catalog record definitions
//! - [`catalog`] - Id-indexed catalog and selection queries
//! - [`roster`] - The editable Company and its mutations
//! - [`cost`] - Force Point cost engine
//! - [`validation`] - Composition rules
//! - [`rules`] - Fixed numbers from the rulebook

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod catalog;
pub mod cost;
pub mod data;
pub mod error;
pub mod evaluation;
pub mod roster;
pub mod rules;
pub mod validation;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogData};
    pub use crate::cost::{compute_costs, CostBreakdown};
    pub use crate::data::{
        Character, CompanyList, Faction, LegendaryLeader, ShipProfile, SpecialRule,
        StandardLeader, UnitProfile, UnitRole, Upgrade, UpgradeCost,
    };
    pub use crate::error::{MusterError, Result};
    pub use crate::evaluation::{evaluate, Evaluation};
    pub use crate::roster::{ActiveLeader, Roster, ShipEntryId, UnitEntryId};
    pub use crate::validation::{validate, RosterError, RosterWarning, ValidationReport};
}
