//! Characters: individual models attached to units.
//!
//! Eligibility is descriptive only. The validation engine does not check a
//! character against the units in a roster.

use serde::{Deserialize, Serialize};

/// Which units a character may join.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AllowedUnitTypes {
    /// Any unit.
    #[default]
    Any,
    /// Leader retinues only.
    Retinue,
    /// Any unit except retinues.
    NonRetinue,
    /// Only the listed unit profile ids.
    Units(Vec<String>),
}

/// A character that may be added to the Company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Flat Force Point cost.
    pub cost: u32,

    /// Restriction text as printed.
    #[serde(default)]
    pub restrictions: String,

    /// Structured eligibility, when the data provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_unit_types: Option<AllowedUnitTypes>,

    /// Special-rule tags.
    #[serde(default)]
    pub special_rules: Vec<String>,

    /// Command points granted.
    #[serde(default)]
    pub command_points: u8,

    /// Command range, if the character issues commands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_range: Option<String>,
}
