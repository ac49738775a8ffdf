//! Species decay rule table

use crate::error::{Error, Result};
use crate::pet::StatChange;
use crate::species::Species;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Hourly decay rates of one species
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayRule {
    pub hunger_per_hour: f64,
    pub happiness_per_hour: f64,
    pub energy_per_hour: f64,
}

impl DecayRule {
    /// Create a new decay rule
    pub fn new(hunger_per_hour: f64, happiness_per_hour: f64, energy_per_hour: f64) -> Self {
        Self {
            hunger_per_hour,
            happiness_per_hour,
            energy_per_hour,
        }
    }

    /// Whole points lost over `hours`, per stat.
    ///
    /// Each amount is `floor(hours * rate)` and never negative, so decay can
    /// only take stats down.
    pub fn decrease(&self, hours: f64) -> StatChange {
        StatChange::new(
            points(hours, self.hunger_per_hour),
            points(hours, self.happiness_per_hour),
            points(hours, self.energy_per_hour),
        )
    }
}

fn points(hours: f64, rate: f64) -> i64 {
    let raw = (hours * rate).floor();
    if raw.is_nan() || raw <= 0.0 {
        0
    } else {
        // `as` saturates at i64::MAX for huge gaps
        raw as i64
    }
}

/// Mapping from species to its decay rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecayRules(IndexMap<Species, DecayRule>);

impl DecayRules {
    /// Create an empty table
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// The reference table
    ///
    /// | species | hunger/h | happiness/h | energy/h |
    /// |---------|----------|-------------|----------|
    /// | cat     | 2.0      | 1.5         | 1.8      |
    /// | dog     | 2.5      | 1.2         | 2.0      |
    /// | rabbit  | 1.8      | 2.0         | 1.5      |
    pub fn reference() -> Self {
        let mut rules = Self::new();
        rules.insert(Species::Cat, DecayRule::new(2.0, 1.5, 1.8));
        rules.insert(Species::Dog, DecayRule::new(2.5, 1.2, 2.0));
        rules.insert(Species::Rabbit, DecayRule::new(1.8, 2.0, 1.5));
        rules
    }

    /// Insert or replace a rule, returning the previous one
    pub fn insert(&mut self, species: Species, rule: DecayRule) -> Option<DecayRule> {
        self.0.insert(species, rule)
    }

    /// Get a rule
    pub fn get(&self, species: Species) -> Option<&DecayRule> {
        self.0.get(&species)
    }

    /// Get a rule, failing with `MissingDecayRule` when the table has no row
    pub fn lookup(&self, species: Species) -> Result<&DecayRule> {
        self.get(species).ok_or(Error::MissingDecayRule(species))
    }

    pub fn contains(&self, species: Species) -> bool {
        self.0.contains_key(&species)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Species, &DecayRule)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for DecayRules {
    fn default() -> Self {
        Self::reference()
    }
}
