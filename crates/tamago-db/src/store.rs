//! Database store wrapper.

use crate::error::{Error, Result};
use crate::history::ActionEntry;
use crate::models::*;
use native_db::*;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;
use tamago_core::{PetId, PetRecord, PetStore};
use tracing::debug;

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredPet>().unwrap();
    models.define::<StoredAction>().unwrap();
    models
});

/// Database store for pets and their action history.
pub struct Store {
    pub(crate) db: Database<'static>,
    next_action_id: AtomicU64,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new()
            .create(&MODELS, path.as_ref())
            .map_err(|e| Error::Database(e.to_string()))?;
        debug!(path = %path.as_ref().display(), "Opened pet database");
        Self::with_db(db)
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Self::with_db(db)
    }

    fn with_db(db: Database<'static>) -> Result<Self> {
        let last_id = {
            let r = db.r_transaction()?;
            let scan = r.scan().primary::<StoredAction>()?;
            let iter = scan.all()?;
            let actions: std::result::Result<Vec<StoredAction>, _> = iter.collect();
            let actions = actions.map_err(|e| Error::Database(e.to_string()))?;
            actions.iter().map(|a| a.id).max().unwrap_or(0)
        };
        Ok(Self {
            db,
            next_action_id: AtomicU64::new(last_id + 1),
        })
    }

    /// Save a pet.
    pub fn save_pet(&self, pet: &PetRecord) -> Result<()> {
        let stored = StoredPet::from_pet(pet);
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        debug!(pet_id = pet.id.raw(), level = pet.level, "Saved pet");
        Ok(())
    }

    /// Load a pet by ID.
    pub fn load_pet(&self, id: PetId) -> Result<Option<PetRecord>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredPet> = r.get().primary(id.raw())?;
        debug!(pet_id = id.raw(), found = stored.is_some(), "Loaded pet");
        stored.map(|s| s.to_pet()).transpose()
    }

    /// Delete a pet. Its action history is kept.
    pub fn delete_pet(&self, id: PetId) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        let stored: Option<StoredPet> = rw.get().primary(id.raw())?;
        if let Some(s) = stored {
            rw.remove(s)?;
        }
        rw.commit()?;
        Ok(())
    }

    /// Load all pets.
    pub fn load_all_pets(&self) -> Result<Vec<PetRecord>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredPet>()?;
        let iter = scan.all()?;
        let pets: std::result::Result<Vec<StoredPet>, _> = iter.collect();
        let pets = pets.map_err(|e| Error::Database(e.to_string()))?;
        pets.iter().map(StoredPet::to_pet).collect()
    }

    /// Append an action to the history, returning its sequence number.
    pub fn record_action(&self, entry: &ActionEntry) -> Result<u64> {
        let id = self.next_action_id.fetch_add(1, Ordering::Relaxed);
        let stored = StoredAction::from_entry(id, entry);
        let rw = self.db.rw_transaction()?;
        rw.insert(stored)?;
        rw.commit()?;
        debug!(
            pet_id = entry.pet_id.raw(),
            action = %entry.action,
            seq = id,
            "Recorded action"
        );
        Ok(id)
    }

    /// Save a pet and append an action to its history as one commit.
    ///
    /// Either both rows land or neither does. Returns the action's sequence id.
    pub fn save_pet_with_action(&self, pet: &PetRecord, entry: &ActionEntry) -> Result<u64> {
        let id = self.next_action_id.fetch_add(1, Ordering::Relaxed);
        let rw = self.db.rw_transaction()?;
        rw.upsert(StoredPet::from_pet(pet))?;
        rw.insert(StoredAction::from_entry(id, entry))?;
        rw.commit()?;
        debug!(
            pet_id = pet.id.raw(),
            level = pet.level,
            action = %entry.action,
            seq = id,
            "Saved pet with action"
        );
        Ok(id)
    }

    /// Clear all data.
    pub fn clear(&self) -> Result<()> {
        // First, collect all keys
        let (pet_ids, action_ids): (Vec<u64>, Vec<u64>) = {
            let r = self.db.r_transaction()?;
            let pets: std::result::Result<Vec<StoredPet>, _> =
                r.scan().primary::<StoredPet>()?.all()?.collect();
            let pets = pets.map_err(|e| Error::Database(e.to_string()))?;
            let actions: std::result::Result<Vec<StoredAction>, _> =
                r.scan().primary::<StoredAction>()?.all()?.collect();
            let actions = actions.map_err(|e| Error::Database(e.to_string()))?;
            (
                pets.into_iter().map(|p| p.id).collect(),
                actions.into_iter().map(|a| a.id).collect(),
            )
        };

        // Now delete in a separate transaction
        let rw = self.db.rw_transaction()?;

        for id in pet_ids {
            if let Some(pet) = rw.get().primary::<StoredPet>(id)? {
                rw.remove(pet)?;
            }
        }

        for id in action_ids {
            if let Some(action) = rw.get().primary::<StoredAction>(id)? {
                rw.remove(action)?;
            }
        }

        rw.commit()?;
        Ok(())
    }
}

impl PetStore for Store {
    type Error = Error;

    fn load(&self, id: PetId) -> Result<Option<PetRecord>> {
        self.load_pet(id)
    }

    fn save(&self, pet: &PetRecord) -> Result<()> {
        self.save_pet(pet)
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}
