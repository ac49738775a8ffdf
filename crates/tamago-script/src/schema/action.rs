//! Action definition schema

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tamago_core::{ActionKind, ActionRule};

/// Definition of one action's effect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDef {
    /// Which action this row describes
    pub kind: ActionKind,
    /// Hunger change
    #[serde(default)]
    pub hunger: i32,
    /// Happiness change
    #[serde(default)]
    pub happiness: i32,
    /// Energy change
    #[serde(default)]
    pub energy: i32,
    /// Base experience, must not be negative
    #[serde(default)]
    pub experience: i64,
}

impl ActionDef {
    /// Validate and convert into an engine rule
    pub fn to_rule(&self) -> Result<ActionRule> {
        let experience = u32::try_from(self.experience).map_err(|_| {
            Error::InvalidSchema(format!(
                "action {}: experience {} out of range",
                self.kind, self.experience
            ))
        })?;
        Ok(ActionRule::new(
            self.hunger,
            self.happiness,
            self.energy,
            experience,
        ))
    }
}
