//! Action history models for database storage.

use super::{from_parts, to_parts};
use crate::error::{Error, Result};
use crate::history::ActionEntry;
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};
use tamago_core::{ActionKind, PetId};

/// Stored action performed on a pet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db]
pub struct StoredAction {
    /// Primary key - insertion sequence.
    #[primary_key]
    pub id: u64,
    /// Pet the action was performed on.
    #[secondary_key]
    pub pet_id: u64,
    /// Action token.
    pub action: String,
    /// User who performed it, if known.
    pub actor: Option<i64>,
    pub exp_gain: u32,
    pub leveled_up: bool,
    /// When it happened, epoch seconds.
    pub at_secs: i64,
    /// When it happened, sub-second nanoseconds.
    pub at_nanos: u32,
}

impl StoredAction {
    /// Create from a history entry.
    pub fn from_entry(id: u64, entry: &ActionEntry) -> Self {
        let (at_secs, at_nanos) = to_parts(entry.at);
        Self {
            id,
            pet_id: entry.pet_id.raw(),
            action: entry.action.as_str().to_string(),
            actor: entry.actor,
            exp_gain: entry.exp_gain,
            leveled_up: entry.leveled_up,
            at_secs,
            at_nanos,
        }
    }

    /// Convert to a history entry.
    pub fn to_entry(&self) -> Result<ActionEntry> {
        let action: ActionKind = self
            .action
            .parse()
            .map_err(|e: tamago_core::Error| Error::Serialization(e.to_string()))?;
        Ok(ActionEntry {
            pet_id: PetId::new(self.pet_id),
            action,
            actor: self.actor,
            exp_gain: self.exp_gain,
            leveled_up: self.leveled_up,
            at: from_parts(self.at_secs, self.at_nanos)?,
        })
    }
}
