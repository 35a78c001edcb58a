//! Unit profiles and the upgrade records shared with leaders.

use serde::{Deserialize, Serialize};

/// Training level printed on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExperienceLevel {
    /// Levies and green troops.
    Inexperienced,
    /// The common case.
    #[default]
    Trained,
    /// Seasoned soldiers and leaders.
    Veteran,
}

impl ExperienceLevel {
    /// Get the display name for this level.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Inexperienced => "Inexperienced",
            Self::Trained => "Trained",
            Self::Veteran => "Veteran",
        }
    }
}

/// Shoot / melee / resolve ratings.
///
/// Shoot and melee are printed as "attack/save" pairs such as `"5/6"`, with
/// `"-"` standing in for units that cannot shoot. They are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CombatStats {
    /// Shooting rating, e.g. `"6/7"` or `"-/6"`.
    pub shoot: String,

    /// Melee rating, e.g. `"5/5"`.
    pub melee: String,

    /// Resolve target number.
    pub resolve: u8,
}

/// How an upgrade is applied to the unit that takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UpgradeKind {
    /// Bought for every model in the unit.
    Model,
    /// Bought once for the whole unit.
    #[default]
    Unit,
    /// One-off special equipment or rule.
    Special,
}

/// Price of an upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeCost {
    /// Flat cost regardless of unit size.
    Flat(u32),
    /// Cost multiplied by the number of models in the unit.
    PerModel(u32),
}

impl Default for UpgradeCost {
    fn default() -> Self {
        Self::Flat(0)
    }
}

/// An optional purchase for a unit or a leader's retinue.
///
/// # Example RON
///
/// ```ron
/// Upgrade(
///     id: "destriers",
///     name: "Destriers or Coursers",
///     kind: Model,
///     cost: PerModel(5),
///     description: "Retinue gains Mounted, Heavy Cavalry, and Impetuous",
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrade {
    /// Identifier, unique within the owning profile.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Descriptive category.
    #[serde(default)]
    pub kind: UpgradeKind,

    /// Price.
    #[serde(default)]
    pub cost: UpgradeCost,

    /// Rules text.
    #[serde(default)]
    pub description: String,
}

impl Upgrade {
    /// Cost of this upgrade for a unit of `models` models.
    #[must_use]
    pub const fn cost_for(&self, models: u32) -> u32 {
        match self.cost {
            UpgradeCost::Flat(cost) => cost,
            UpgradeCost::PerModel(cost) => cost.saturating_mul(models),
        }
    }

    /// Whether the cost scales with model count.
    #[must_use]
    pub const fn is_per_model(&self) -> bool {
        matches!(self.cost, UpgradeCost::PerModel(_))
    }
}

/// Find an upgrade by id in a profile's upgrade list.
pub(crate) fn find_upgrade<'a>(upgrades: &'a [Upgrade], id: &str) -> Option<&'a Upgrade> {
    upgrades.iter().find(|u| u.id == id)
}

/// A recruitable unit type.
///
/// # Example RON
///
/// ```ron
/// UnitProfile(
///     id: "men_at_arms_afoot",
///     name: "Men-at-Arms, Afoot",
///     cost_per_model: 7,
///     min_models: 3,
///     max_models: 6,
///     experience: Trained,
///     stats: CombatStats(shoot: "-/6", melee: "6/6", resolve: 6),
///     upgrades: [
///         Upgrade(id: "plate_mail", name: "Plate & Mail", cost: Flat(6)),
///     ],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitProfile {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Force Points per model.
    pub cost_per_model: u32,

    /// Smallest legal unit size.
    pub min_models: u32,

    /// Largest legal unit size.
    pub max_models: u32,

    /// Training level.
    #[serde(default)]
    pub experience: ExperienceLevel,

    /// Weapons carried.
    #[serde(default)]
    pub arms: String,

    /// Combat ratings.
    #[serde(default)]
    pub stats: CombatStats,

    /// Special-rule tags.
    #[serde(default)]
    pub special_rules: Vec<String>,

    /// Optional purchases.
    #[serde(default)]
    pub upgrades: Vec<Upgrade>,

    /// Free-text notes, e.g. upgrade ineligibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl UnitProfile {
    /// Find an upgrade offered by this unit.
    #[must_use]
    pub fn get_upgrade(&self, id: &str) -> Option<&Upgrade> {
        find_upgrade(&self.upgrades, id)
    }

    /// Check if this unit has the specified special rule.
    #[must_use]
    pub fn has_rule(&self, rule: &str) -> bool {
        self.special_rules.iter().any(|r| r == rule)
    }

    /// Clamp a model count into this profile's legal range.
    ///
    /// The minimum wins when a profile's range is inverted.
    #[must_use]
    pub fn clamp_models(&self, models: i64) -> u32 {
        let clamped = models
            .min(i64::from(self.max_models))
            .max(i64::from(self.min_models));
        u32::try_from(clamped).unwrap_or(self.min_models)
    }
}
