//! Decay definition schema

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tamago_core::{DecayRule, Species};

/// Definition of one species' hourly decay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayDef {
    pub species: Species,
    #[serde(default)]
    pub hunger_per_hour: f64,
    #[serde(default)]
    pub happiness_per_hour: f64,
    #[serde(default)]
    pub energy_per_hour: f64,
}

impl DecayDef {
    /// Validate and convert into an engine rule
    ///
    /// Rates must be finite and not negative.
    pub fn to_rule(&self) -> Result<DecayRule> {
        for (stat, rate) in [
            ("hunger_per_hour", self.hunger_per_hour),
            ("happiness_per_hour", self.happiness_per_hour),
            ("energy_per_hour", self.energy_per_hour),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(Error::InvalidSchema(format!(
                    "decay {}: {} must be a non-negative number, got {}",
                    self.species, stat, rate
                )));
            }
        }
        Ok(DecayRule::new(
            self.hunger_per_hour,
            self.happiness_per_hour,
            self.energy_per_hour,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_def_ron() {
        let ron_str = r#"
        (
            species: dog,
            hunger_per_hour: 2.5,
            happiness_per_hour: 1.2,
            energy_per_hour: 2.0,
        )
        "#;

        let def: DecayDef = ron::from_str(ron_str).unwrap();
        assert_eq!(def.species, Species::Dog);
        assert_eq!(def.to_rule().unwrap(), DecayRule::new(2.5, 1.2, 2.0));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let def: DecayDef =
            ron::from_str("(species: cat, hunger_per_hour: -0.5)").unwrap();
        let err = def.to_rule().unwrap_err();
        assert!(err.to_string().contains("hunger_per_hour"));
    }

    #[test]
    fn test_non_finite_rate_rejected() {
        let def = DecayDef {
            species: Species::Rabbit,
            hunger_per_hour: 1.0,
            happiness_per_hour: f64::INFINITY,
            energy_per_hour: 1.0,
        };
        assert!(matches!(def.to_rule(), Err(Error::InvalidSchema(_))));
    }
}
