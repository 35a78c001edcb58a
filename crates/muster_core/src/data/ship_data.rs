//! Ship profiles for Sea Battles.

use serde::{Deserialize, Serialize};

/// A purchasable ship fitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipOption {
    /// Display name. Options are keyed by name in a roster.
    pub name: String,

    /// Flat Force Point cost.
    pub cost: u32,
}

/// A ship that may be added to a Company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipProfile {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Flat Force Point cost.
    pub cost: u32,

    /// Size class.
    #[serde(default)]
    pub size: u8,

    /// Hull save, e.g. `"4+"`.
    #[serde(default)]
    pub hull_save: String,

    /// Draft class.
    #[serde(default)]
    pub draft: String,

    /// Top speed in inches.
    #[serde(default)]
    pub top_speed: String,

    /// Special-rule tags; `Boat` marks small craft.
    #[serde(default)]
    pub special_rules: Vec<String>,

    /// Purchasable fittings.
    #[serde(default)]
    pub options: Vec<ShipOption>,
}

impl ShipProfile {
    /// Find an option by its name.
    #[must_use]
    pub fn get_option(&self, name: &str) -> Option<&ShipOption> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Check if this ship has the specified special rule.
    #[must_use]
    pub fn has_rule(&self, rule: &str) -> bool {
        self.special_rules.iter().any(|r| r == rule)
    }

    /// Small craft carry the `Boat` rule and do not count as a ship for
    /// Sea Battle requirements.
    #[must_use]
    pub fn is_boat(&self) -> bool {
        self.has_rule(crate::rules::BOAT_RULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boat_and_option_lookup() {
        let ship = ShipProfile {
            id: "rowing_boat".to_string(),
            name: "Rowing Boat".to_string(),
            cost: 5,
            size: 1,
            hull_save: "6+".to_string(),
            draft: "Shallow".to_string(),
            top_speed: "4\"".to_string(),
            special_rules: vec!["Boat".to_string()],
            options: vec![ShipOption {
                name: "Swivel Gun".to_string(),
                cost: 3,
            }],
        };

        assert!(ship.is_boat());
        assert_eq!(ship.get_option("Swivel Gun").map(|o| o.cost), Some(3));
        assert!(ship.get_option("Sterncastle").is_none());
    }
}
