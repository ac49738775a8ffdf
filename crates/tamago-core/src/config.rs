//! Engine configuration - numeric constants of the simulation
//!
//! The rule tables say *what* each action and species does. This module
//! holds the remaining knobs: the decay debounce window, the experience
//! curve, the mood bonus and the stat range.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Numeric settings for the [`Engine`](crate::Engine)
///
/// # Example
///
/// ```
/// use tamago_core::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.decay_threshold_hours, 0.1);
/// assert_eq!(config.experience_per_level, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Gaps shorter than this many hours are not decayed yet
    pub decay_threshold_hours: f64,
    /// Experience per level; the threshold is `level * experience_per_level`
    pub experience_per_level: u32,
    /// Mood bonus is `happiness / happiness_bonus_divisor` (integer division)
    pub happiness_bonus_divisor: u32,
    /// Lowest stat value
    pub stat_min: u32,
    /// Highest stat value
    pub stat_max: u32,
}

impl EngineConfig {
    /// Check that the settings keep the engine's invariants satisfiable.
    ///
    /// Rejects an empty stat range (`stat_min > stat_max`), a zero
    /// `experience_per_level` and a negative or non-finite debounce window.
    pub fn validate(&self) -> Result<()> {
        if self.stat_min > self.stat_max {
            return Err(Error::InvalidConfig(format!(
                "stat_min {} is above stat_max {}",
                self.stat_min, self.stat_max
            )));
        }
        if self.experience_per_level == 0 {
            return Err(Error::InvalidConfig(
                "experience_per_level must be positive".to_string(),
            ));
        }
        if !self.decay_threshold_hours.is_finite() || self.decay_threshold_hours < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "decay_threshold_hours must be a non-negative number, got {}",
                self.decay_threshold_hours
            )));
        }
        Ok(())
    }

    /// Experience bonus for the given happiness.
    ///
    /// A zero divisor disables the bonus.
    pub fn happiness_bonus(&self, happiness: u32) -> u32 {
        happiness
            .checked_div(self.happiness_bonus_divisor)
            .unwrap_or(0)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            decay_threshold_hours: 0.1,
            experience_per_level: 100,
            happiness_bonus_divisor: 20,
            stat_min: 0,
            stat_max: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_stat_range_rejected() {
        let config: EngineConfig = ron::from_str("(stat_min: 60, stat_max: 40)").unwrap();
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let single: EngineConfig = ron::from_str("(stat_min: 50, stat_max: 50)").unwrap();
        assert!(single.validate().is_ok());
    }

    #[test]
    fn test_zero_experience_per_level_rejected() {
        let config: EngineConfig = ron::from_str("(experience_per_level: 0)").unwrap();
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_bad_decay_threshold_rejected() {
        let negative = EngineConfig {
            decay_threshold_hours: -0.5,
            ..EngineConfig::default()
        };
        assert!(matches!(negative.validate(), Err(Error::InvalidConfig(_))));

        let nan = EngineConfig {
            decay_threshold_hours: f64::NAN,
            ..EngineConfig::default()
        };
        assert!(matches!(nan.validate(), Err(Error::InvalidConfig(_))));

        let zero = EngineConfig {
            decay_threshold_hours: 0.0,
            ..EngineConfig::default()
        };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn test_happiness_bonus() {
        let config = EngineConfig::default();
        assert_eq!(config.happiness_bonus(95), 4);
        assert_eq!(config.happiness_bonus(19), 0);
        assert_eq!(config.happiness_bonus(100), 5);
    }

    #[test]
    fn test_zero_divisor_disables_bonus() {
        let config = EngineConfig {
            happiness_bonus_divisor: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.happiness_bonus(100), 0);
    }

    #[test]
    fn test_partial_config_ron() {
        let config: EngineConfig = ron::from_str("(experience_per_level: 50)").unwrap();
        assert_eq!(config.experience_per_level, 50);
        assert_eq!(config.stat_max, 100);
    }
}
