//! Factions, their special rules, and the company lists they field.

use serde::{Deserialize, Serialize};

/// A faction or company special rule.
///
/// Rules carrying a `cost` are optional purchases the player toggles on;
/// rules without one are always in effect and never add to the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialRule {
    /// Stable identifier used as the toggle key.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Rules text.
    #[serde(default)]
    pub description: String,

    /// Force Point cost when bought.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,

    /// Eligibility restriction text, e.g. "Noble and Magnate Leaders Only".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction: Option<String>,
}

impl SpecialRule {
    /// Check whether this rule is a purchasable upgrade.
    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        self.cost.is_some()
    }
}

/// Complete faction definition.
///
/// # Example RON
///
/// ```ron
/// Faction(
///     id: "france",
///     name: "France",
///     special_rules: [
///         SpecialRule(id: "ordre_de_letoile", name: "Ordre de l'Étoile", cost: Some(7)),
///     ],
///     company_lists: ["french_army_crecy"],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faction {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Flavour text.
    #[serde(default)]
    pub description: String,

    /// Faction-wide special rules.
    #[serde(default)]
    pub special_rules: Vec<SpecialRule>,

    /// Company lists this faction may field.
    #[serde(default)]
    pub company_lists: Vec<String>,
}

impl Faction {
    /// Find a special rule by id.
    #[must_use]
    pub fn get_rule(&self, id: &str) -> Option<&SpecialRule> {
        self.special_rules.iter().find(|r| r.id == id)
    }

    /// Rules the player may buy.
    pub fn purchasable_rules(&self) -> impl Iterator<Item = &SpecialRule> {
        self.special_rules.iter().filter(|r| r.is_purchasable())
    }
}

/// The structural role a unit fills in a company list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitRole {
    /// The backbone of the Company.
    MainBattle,
    /// Elite or forward troops, capped at half the Main Battle.
    Vanguard,
    /// Held back troops, capped at a third of the Main Battle.
    Reserve,
}

impl UnitRole {
    /// All roles in display order.
    pub const ALL: [Self; 3] = [Self::MainBattle, Self::Vanguard, Self::Reserve];

    /// Get the display name for this role.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::MainBattle => "Main Battle",
            Self::Vanguard => "Vanguard",
            Self::Reserve => "Reserve",
        }
    }
}

/// A faction-scoped template of selectable leaders and units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyList {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Owning faction id.
    pub faction: String,

    /// Period or subtitle, e.g. "1345-56".
    #[serde(default)]
    pub subtitle: String,

    /// Standard and legendary leader ids available to this list.
    #[serde(default)]
    pub available_leaders: Vec<String>,

    /// Unit ids fielded as Main Battle.
    #[serde(default)]
    pub main_battle: Vec<String>,

    /// Unit ids fielded as Vanguard.
    #[serde(default)]
    pub vanguard: Vec<String>,

    /// Unit ids fielded as Reserve.
    #[serde(default)]
    pub reserve: Vec<String>,

    /// Company-level special rules.
    #[serde(default)]
    pub special_rules: Vec<SpecialRule>,

    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CompanyList {
    /// Unit ids for one role.
    #[must_use]
    pub fn units_in(&self, role: UnitRole) -> &[String] {
        match role {
            UnitRole::MainBattle => &self.main_battle,
            UnitRole::Vanguard => &self.vanguard,
            UnitRole::Reserve => &self.reserve,
        }
    }

    /// The role `unit_id` fills in this list, if any.
    ///
    /// Main Battle is checked first, then Vanguard, then Reserve.
    #[must_use]
    pub fn role_of(&self, unit_id: &str) -> Option<UnitRole> {
        UnitRole::ALL
            .into_iter()
            .find(|&role| self.units_in(role).iter().any(|u| u == unit_id))
    }

    /// Check if a leader id is offered by this list.
    #[must_use]
    pub fn offers_leader(&self, leader_id: &str) -> bool {
        self.available_leaders.iter().any(|l| l == leader_id)
    }

    /// Every unit id the list references, in role order.
    pub fn all_units(&self) -> impl Iterator<Item = &String> {
        self.main_battle
            .iter()
            .chain(&self.vanguard)
            .chain(&self.reserve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_list() -> CompanyList {
        CompanyList {
            id: "english_army_crecy".to_string(),
            name: "English Army in France, Crecy to Poitiers".to_string(),
            faction: "england_wales_ireland".to_string(),
            subtitle: "1345-56".to_string(),
            available_leaders: vec!["magnate".to_string(), "edward_black_prince".to_string()],
            main_battle: vec!["archers_english".to_string(), "footmen".to_string()],
            vanguard: vec!["men_at_arms_afoot".to_string()],
            reserve: vec!["vet_men_at_arms_afoot".to_string()],
            special_rules: vec![],
            notes: None,
        }
    }

    #[test]
    fn test_role_of() {
        let list = create_test_list();
        assert_eq!(list.role_of("footmen"), Some(UnitRole::MainBattle));
        assert_eq!(list.role_of("men_at_arms_afoot"), Some(UnitRole::Vanguard));
        assert_eq!(list.role_of("vet_men_at_arms_afoot"), Some(UnitRole::Reserve));
        assert_eq!(list.role_of("pikemen"), None);
    }

    #[test]
    fn test_offers_leader() {
        let list = create_test_list();
        assert!(list.offers_leader("edward_black_prince"));
        assert!(!list.offers_leader("joan_of_arc"));
    }

    #[test]
    fn test_purchasable_rules() {
        let faction = Faction {
            id: "france".to_string(),
            name: "France".to_string(),
            description: String::new(),
            special_rules: vec![
                SpecialRule {
                    id: "oriflamme".to_string(),
                    name: "Oriflamme".to_string(),
                    description: String::new(),
                    cost: None,
                    restriction: None,
                },
                SpecialRule {
                    id: "ordre_de_letoile".to_string(),
                    name: "Ordre de l'Étoile".to_string(),
                    description: String::new(),
                    cost: Some(7),
                    restriction: Some("Standard Noble and Magnate Leaders Only".to_string()),
                },
            ],
            company_lists: vec![],
        };

        let ids: Vec<_> = faction.purchasable_rules().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["ordre_de_letoile"]);
        assert!(faction.get_rule("oriflamme").is_some());
    }
}
