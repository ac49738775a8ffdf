//! Common query patterns for the database.

use crate::error::{Error, Result};
use crate::history::ActionEntry;
use crate::models::*;
use crate::store::Store;
use tamago_core::{PetId, PetRecord, Species};

impl Store {
    /// Get all pets of a species.
    pub fn pets_by_species(&self, species: Species) -> Result<Vec<PetRecord>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().secondary::<StoredPet>(StoredPetKey::species)?;
        let iter = scan.start_with(species.as_str())?;
        let pets: std::result::Result<Vec<StoredPet>, _> = iter.collect();
        let pets = pets.map_err(|e| Error::Database(e.to_string()))?;
        pets.iter().map(StoredPet::to_pet).collect()
    }

    /// Get the most recent actions on a pet, newest first.
    pub fn recent_actions(&self, pet_id: PetId, limit: usize) -> Result<Vec<ActionEntry>> {
        let mut actions = self.stored_actions(pet_id)?;
        actions.sort_by(|a, b| {
            (b.at_secs, b.at_nanos, b.id).cmp(&(a.at_secs, a.at_nanos, a.id))
        });
        actions
            .iter()
            .take(limit)
            .map(StoredAction::to_entry)
            .collect()
    }

    /// Count the actions ever recorded on a pet.
    pub fn count_actions(&self, pet_id: PetId) -> Result<usize> {
        Ok(self.stored_actions(pet_id)?.len())
    }

    fn stored_actions(&self, pet_id: PetId) -> Result<Vec<StoredAction>> {
        let r = self.db.r_transaction()?;
        let scan = r
            .scan()
            .secondary::<StoredAction>(StoredActionKey::pet_id)?;
        let iter = scan.start_with(pet_id.raw())?;
        let actions: std::result::Result<Vec<StoredAction>, _> = iter.collect();
        actions.map_err(|e| Error::Database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use tamago_core::{ActionKind, Timestamp};

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap()
    }

    fn entry(pet: u64, action: ActionKind, minutes: i64) -> ActionEntry {
        ActionEntry {
            pet_id: PetId::new(pet),
            action,
            actor: Some(42),
            exp_gain: 10,
            leveled_up: false,
            at: t0() + Duration::minutes(minutes),
        }
    }

    #[test]
    fn test_pets_by_species() {
        let store = Store::in_memory().unwrap();
        store
            .save_pet(&PetRecord::new(PetId::new(1), "Tom", Species::Cat, t0()))
            .unwrap();
        store
            .save_pet(&PetRecord::new(PetId::new(2), "Rex", Species::Dog, t0()))
            .unwrap();
        store
            .save_pet(&PetRecord::new(PetId::new(3), "Kit", Species::Cat, t0()))
            .unwrap();

        let cats = store.pets_by_species(Species::Cat).unwrap();
        let mut names: Vec<&str> = cats.iter().map(|p| p.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["Kit", "Tom"]);
        assert!(store.pets_by_species(Species::Rabbit).unwrap().is_empty());
    }

    #[test]
    fn test_recent_actions_newest_first() {
        let store = Store::in_memory().unwrap();
        store.record_action(&entry(1, ActionKind::Feed, 0)).unwrap();
        store.record_action(&entry(1, ActionKind::Play, 10)).unwrap();
        store.record_action(&entry(2, ActionKind::Sleep, 5)).unwrap();
        store.record_action(&entry(1, ActionKind::Pet, 20)).unwrap();

        let recent = store.recent_actions(PetId::new(1), 2).unwrap();
        let kinds: Vec<ActionKind> = recent.iter().map(|e| e.action).collect();
        assert_eq!(kinds, vec![ActionKind::Pet, ActionKind::Play]);
        assert_eq!(recent[0].actor, Some(42));

        assert_eq!(store.count_actions(PetId::new(1)).unwrap(), 3);
        assert_eq!(store.count_actions(PetId::new(2)).unwrap(), 1);
        assert_eq!(store.count_actions(PetId::new(3)).unwrap(), 0);
    }
}
