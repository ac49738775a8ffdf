//! Identity type for pets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Owner-assigned identifier of a pet record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(pub u64);

impl PetId {
    /// Create a new pet ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pet:{}", self.0)
    }
}

impl From<u64> for PetId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
