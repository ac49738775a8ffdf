//! Persistence boundary
//!
//! The engine never stores anything. Hosts keep pets in whatever medium
//! they like by implementing [`PetStore`]; a saved record must load back
//! unchanged.

use crate::identity::PetId;
use crate::pet::PetRecord;

/// Load/save contract for pet records
pub trait PetStore {
    /// Storage failure type
    type Error;

    /// Load a pet, or `None` when it does not exist.
    fn load(&self, id: PetId) -> Result<Option<PetRecord>, Self::Error>;

    /// Insert or replace a pet.
    fn save(&self, pet: &PetRecord) -> Result<(), Self::Error>;
}
