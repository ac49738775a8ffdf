//! The pet record and the stat clamping primitive

use crate::config::EngineConfig;
use crate::identity::PetId;
use crate::species::Species;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Signed change to the three stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatChange {
    pub hunger: i64,
    pub happiness: i64,
    pub energy: i64,
}

impl StatChange {
    pub fn new(hunger: i64, happiness: i64, energy: i64) -> Self {
        Self {
            hunger,
            happiness,
            energy,
        }
    }

    /// The same change with every sign flipped.
    pub fn negated(&self) -> Self {
        Self::new(
            self.hunger.saturating_neg(),
            self.happiness.saturating_neg(),
            self.energy.saturating_neg(),
        )
    }

    pub fn is_zero(&self) -> bool {
        self.hunger == 0 && self.happiness == 0 && self.energy == 0
    }
}

/// Persisted state of one virtual pet
///
/// `id`, `name` and `species` are fixed at creation; the engine only ever
/// rewrites the stats, progress and `last_updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetRecord {
    pub id: PetId,
    pub name: String,
    pub species: Species,
    /// Satiation, 0..=100
    pub hunger: u32,
    /// Mood, 0..=100
    pub happiness: u32,
    /// Stamina, 0..=100
    pub energy: u32,
    /// Always >= 1
    pub level: u32,
    /// Always below `level * 100` after an engine call
    pub experience: u32,
    /// Last instant decay was applied (actions advance it too)
    pub last_updated: Timestamp,
}

impl PetRecord {
    pub const DEFAULT_HUNGER: u32 = 80;
    pub const DEFAULT_HAPPINESS: u32 = 90;
    pub const DEFAULT_ENERGY: u32 = 75;

    /// Create a freshly adopted pet: well fed, happy, level 1, no experience.
    pub fn new(id: PetId, name: impl Into<String>, species: Species, now: Timestamp) -> Self {
        Self {
            id,
            name: name.into(),
            species,
            hunger: Self::DEFAULT_HUNGER,
            happiness: Self::DEFAULT_HAPPINESS,
            energy: Self::DEFAULT_ENERGY,
            level: 1,
            experience: 0,
            last_updated: now,
        }
    }

    /// The demo pet handed out when no stored record exists.
    pub fn seeded(now: Timestamp) -> Self {
        Self {
            experience: 25,
            ..Self::new(PetId::new(1), "Murzik", Species::Cat, now)
        }
    }

    /// Experience needed to leave the current level (reference: `level * 100`).
    pub fn level_threshold(&self) -> u64 {
        self.level_threshold_with(&EngineConfig::default())
    }

    pub(crate) fn level_threshold_with(&self, config: &EngineConfig) -> u64 {
        u64::from(self.level) * u64::from(config.experience_per_level)
    }

    /// Experience still missing before the next level-up.
    pub fn experience_to_next_level(&self) -> u64 {
        self.level_threshold()
            .saturating_sub(u64::from(self.experience))
    }

    /// Add `change` to the stats, clamping each one to `[min, max]`.
    ///
    /// All three stats are computed before any is written.
    pub fn apply_change(&mut self, change: StatChange, min: u32, max: u32) {
        let hunger = clamp_stat(i64::from(self.hunger).saturating_add(change.hunger), min, max);
        let happiness = clamp_stat(
            i64::from(self.happiness).saturating_add(change.happiness),
            min,
            max,
        );
        let energy = clamp_stat(i64::from(self.energy).saturating_add(change.energy), min, max);
        self.hunger = hunger;
        self.happiness = happiness;
        self.energy = energy;
    }
}

/// `max(min, min(max, value))`
pub(crate) fn clamp_stat(value: i64, min: u32, max: u32) -> u32 {
    value.clamp(i64::from(min), i64::from(max)) as u32
}
