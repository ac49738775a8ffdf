//! Action history entries.

use serde::{Deserialize, Serialize};
use tamago_core::{ActionKind, ActionOutcome, PetId, Timestamp};

/// One recorded action on a pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEntry {
    pub pet_id: PetId,
    pub action: ActionKind,
    /// User who performed the action, if known.
    pub actor: Option<i64>,
    pub exp_gain: u32,
    pub leveled_up: bool,
    pub at: Timestamp,
}

impl ActionEntry {
    /// Build an entry from an engine outcome.
    pub fn from_outcome(outcome: &ActionOutcome, actor: Option<i64>, at: Timestamp) -> Self {
        Self {
            pet_id: outcome.pet.id,
            action: outcome.action,
            actor,
            exp_gain: outcome.exp_gain,
            leveled_up: outcome.leveled_up,
            at,
        }
    }
}
