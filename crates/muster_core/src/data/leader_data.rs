//! Standard and legendary leader definitions.

use serde::{Deserialize, Serialize};

use super::unit_data::{find_upgrade, CombatStats, ExperienceLevel, Upgrade};

/// A generic leader type.
///
/// The standard leader is also the retinue's profile: the Company pays
/// `cost_per_model` for every model in the retinue.
///
/// # Example RON
///
/// ```ron
/// StandardLeader(
///     id: "noble",
///     name: "Noble",
///     cost_per_model: 9,
///     stats: CombatStats(shoot: "-/5", melee: "5/5", resolve: 4),
///     command_points: 2,
///     command_range: "6\"",
///     experience: Veteran,
///     special_rules: ["Prize"],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardLeader {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Force Points per retinue model.
    pub cost_per_model: u32,

    /// Combat ratings.
    #[serde(default)]
    pub stats: CombatStats,

    /// Command points per turn.
    #[serde(default)]
    pub command_points: u8,

    /// Command range, e.g. `6"`.
    #[serde(default)]
    pub command_range: String,

    /// Training level.
    #[serde(default)]
    pub experience: ExperienceLevel,

    /// Retinue upgrades.
    #[serde(default)]
    pub upgrades: Vec<Upgrade>,

    /// Special-rule tags.
    #[serde(default)]
    pub special_rules: Vec<String>,

    /// Only usable in Sea Battles (ship's masters and the like).
    #[serde(default)]
    pub sea_battle_only: bool,

    /// Unit-composition note for non-generic leader types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
}

impl StandardLeader {
    /// Find a retinue upgrade by id.
    #[must_use]
    pub fn get_upgrade(&self, id: &str) -> Option<&Upgrade> {
        find_upgrade(&self.upgrades, id)
    }
}

/// A named historical leader with a flat cost.
///
/// Legendary leaders sit on top of a standard retinue; they never replace
/// its per-model price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendaryLeader {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Flat Force Point cost.
    pub cost: u32,

    /// Standard leader ids this legendary may lead. Empty means unrestricted.
    #[serde(default)]
    pub allowed_retinue_types: Vec<String>,

    /// Ability text.
    #[serde(default)]
    pub ability: String,

    /// Special-rule tags.
    #[serde(default)]
    pub special_rules: Vec<String>,
}

impl LegendaryLeader {
    /// Check whether this legendary may lead a retinue of `leader_type_id`.
    #[must_use]
    pub fn accepts_retinue(&self, leader_type_id: &str) -> bool {
        self.allowed_retinue_types.is_empty()
            || self.allowed_retinue_types.iter().any(|t| t == leader_type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legendary(allowed: &[&str]) -> LegendaryLeader {
        LegendaryLeader {
            id: "joan_of_arc".to_string(),
            name: "Joan of Arc".to_string(),
            cost: 30,
            allowed_retinue_types: allowed.iter().map(ToString::to_string).collect(),
            ability: String::new(),
            special_rules: vec![],
        }
    }

    #[test]
    fn test_accepts_declared_retinue_only() {
        let joan = legendary(&["noble"]);
        assert!(joan.accepts_retinue("noble"));
        assert!(!joan.accepts_retinue("magnate"));
    }

    #[test]
    fn test_undeclared_retinue_is_unrestricted() {
        let anyone = legendary(&[]);
        assert!(anyone.accepts_retinue("magnate"));
    }
}
