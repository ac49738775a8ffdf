//! Pet models for database storage.

use super::{from_parts, to_parts};
use crate::error::{Error, Result};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};
use tamago_core::{PetId, PetRecord, Species};

/// Stored pet in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredPet {
    /// Primary key - pet ID.
    #[primary_key]
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Species token.
    #[secondary_key]
    pub species: String,
    pub hunger: u32,
    pub happiness: u32,
    pub energy: u32,
    pub level: u32,
    pub experience: u32,
    /// Last decay instant, epoch seconds.
    pub last_updated_secs: i64,
    /// Last decay instant, sub-second nanoseconds.
    pub last_updated_nanos: u32,
}

impl StoredPet {
    /// Create from a pet record.
    pub fn from_pet(pet: &PetRecord) -> Self {
        let (last_updated_secs, last_updated_nanos) = to_parts(pet.last_updated);
        Self {
            id: pet.id.raw(),
            name: pet.name.clone(),
            species: pet.species.as_str().to_string(),
            hunger: pet.hunger,
            happiness: pet.happiness,
            energy: pet.energy,
            level: pet.level,
            experience: pet.experience,
            last_updated_secs,
            last_updated_nanos,
        }
    }

    /// Convert to a pet record.
    pub fn to_pet(&self) -> Result<PetRecord> {
        let species: Species = self
            .species
            .parse()
            .map_err(|e: tamago_core::Error| Error::Serialization(e.to_string()))?;
        Ok(PetRecord {
            id: PetId::new(self.id),
            name: self.name.clone(),
            species,
            hunger: self.hunger,
            happiness: self.happiness,
            energy: self.energy,
            level: self.level,
            experience: self.experience,
            last_updated: from_parts(self.last_updated_secs, self.last_updated_nanos)?,
        })
    }
}
