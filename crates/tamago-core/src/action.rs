//! Action kinds and the action rule table

use crate::error::{Error, Result};
use crate::pet::StatChange;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A discrete user-triggered action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Feed,
    Play,
    Sleep,
    Pet,
}

impl ActionKind {
    /// All action kinds in table order.
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Feed,
        ActionKind::Play,
        ActionKind::Sleep,
        ActionKind::Pet,
    ];

    /// Lower-case token used on the wire and in rule files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Feed => "feed",
            ActionKind::Play => "play",
            ActionKind::Sleep => "sleep",
            ActionKind::Pet => "pet",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

/// Immediate effect of one action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRule {
    pub hunger_delta: i32,
    pub happiness_delta: i32,
    pub energy_delta: i32,
    /// Experience granted before the mood bonus
    pub base_experience: u32,
}

impl ActionRule {
    /// Create a new action rule
    pub fn new(
        hunger_delta: i32,
        happiness_delta: i32,
        energy_delta: i32,
        base_experience: u32,
    ) -> Self {
        Self {
            hunger_delta,
            happiness_delta,
            energy_delta,
            base_experience,
        }
    }

    /// The stat deltas of this rule.
    pub fn change(&self) -> StatChange {
        StatChange::new(
            self.hunger_delta.into(),
            self.happiness_delta.into(),
            self.energy_delta.into(),
        )
    }
}

/// Mapping from action kind to its rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionRules(IndexMap<ActionKind, ActionRule>);

impl ActionRules {
    /// Create an empty table
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// The reference table
    ///
    /// | action | hunger | happiness | energy | base exp |
    /// |--------|--------|-----------|--------|----------|
    /// | feed   | +30    | +5        | 0      | 5        |
    /// | play   | -5     | +25       | -10    | 15       |
    /// | sleep  | -2     | 0         | +40    | 10       |
    /// | pet    | 0      | +15       | 0      | 8        |
    pub fn reference() -> Self {
        let mut rules = Self::new();
        rules.insert(ActionKind::Feed, ActionRule::new(30, 5, 0, 5));
        rules.insert(ActionKind::Play, ActionRule::new(-5, 25, -10, 15));
        rules.insert(ActionKind::Sleep, ActionRule::new(-2, 0, 40, 10));
        rules.insert(ActionKind::Pet, ActionRule::new(0, 15, 0, 8));
        rules
    }

    /// Insert or replace a rule, returning the previous one
    pub fn insert(&mut self, kind: ActionKind, rule: ActionRule) -> Option<ActionRule> {
        self.0.insert(kind, rule)
    }

    /// Get a rule
    pub fn get(&self, kind: ActionKind) -> Option<&ActionRule> {
        self.0.get(&kind)
    }

    /// Get a rule, failing with `UnknownAction` when the table has no row
    pub fn lookup(&self, kind: ActionKind) -> Result<&ActionRule> {
        self.get(kind)
            .ok_or_else(|| Error::UnknownAction(kind.to_string()))
    }

    pub fn contains(&self, kind: ActionKind) -> bool {
        self.0.contains_key(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActionKind, &ActionRule)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ActionRules {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!("feed".parse::<ActionKind>().unwrap(), ActionKind::Feed);
        assert_eq!("pet".parse::<ActionKind>().unwrap(), ActionKind::Pet);
        assert_eq!(
            "dance".parse::<ActionKind>(),
            Err(Error::UnknownAction("dance".to_string()))
        );
        // Tokens are case-sensitive
        assert!("Feed".parse::<ActionKind>().is_err());
    }

    #[test]
    fn test_reference_table() {
        let rules = ActionRules::reference();
        assert_eq!(rules.len(), 4);
        assert_eq!(rules.get(ActionKind::Feed), Some(&ActionRule::new(30, 5, 0, 5)));
        assert_eq!(rules.get(ActionKind::Play), Some(&ActionRule::new(-5, 25, -10, 15)));
        assert_eq!(rules.get(ActionKind::Sleep), Some(&ActionRule::new(-2, 0, 40, 10)));
        assert_eq!(rules.get(ActionKind::Pet), Some(&ActionRule::new(0, 15, 0, 8)));

        let order: Vec<ActionKind> = rules.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(order, ActionKind::ALL.to_vec());
    }

    #[test]
    fn test_lookup_missing_rule() {
        let mut rules = ActionRules::new();
        rules.insert(ActionKind::Feed, ActionRule::new(10, 0, 0, 1));
        assert!(rules.lookup(ActionKind::Feed).is_ok());
        assert_eq!(
            rules.lookup(ActionKind::Sleep),
            Err(Error::UnknownAction("sleep".to_string()))
        );
    }

    #[test]
    fn test_action_rules_ron() {
        let ron_str = r#"
        {
            feed: (hunger_delta: 12, happiness_delta: 1, energy_delta: 0, base_experience: 3),
        }
        "#;
        let rules: ActionRules = ron::from_str(ron_str).unwrap();
        assert_eq!(rules.get(ActionKind::Feed), Some(&ActionRule::new(12, 1, 0, 3)));
        assert!(!rules.contains(ActionKind::Play));
    }
}
