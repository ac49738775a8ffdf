//! Serialized pet sessions.
//!
//! Actions and decay both read-modify-write the same record, and neither
//! commutes with the other. `Keeper` holds one write lock across each
//! load, engine call and save, so two callers racing on a pet always see
//! each other's result.

use crate::error::Result;
use crate::history::ActionEntry;
use crate::store::Store;
use std::sync::{Mutex, MutexGuard};
use tamago_core::{ActionOutcome, DecayOutcome, Engine, Error as EngineError, PetId, PetRecord, Timestamp};
use tracing::{debug, info, warn};

/// A store plus an engine, with calls against pets serialized.
pub struct Keeper {
    store: Store,
    engine: Engine,
    lock: Mutex<()>,
}

impl Keeper {
    /// Create a keeper over a store and an engine
    pub fn new(store: Store, engine: Engine) -> Self {
        Self {
            store,
            engine,
            lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The guarded data is `()`, so a poisoned lock carries no broken state.
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Persist a newly created pet.
    pub fn adopt(&self, pet: &PetRecord) -> Result<()> {
        let _guard = self.guard();
        self.store.save_pet(pet)?;
        info!(pet_id = pet.id.raw(), species = %pet.species, "Pet adopted");
        Ok(())
    }

    /// Load a pet, or store and return the seeded default pet under `id`.
    pub fn load_or_seed(&self, id: PetId, now: Timestamp) -> Result<PetRecord> {
        let _guard = self.guard();
        if let Some(pet) = self.store.load_pet(id)? {
            return Ok(pet);
        }
        let pet = PetRecord {
            id,
            ..PetRecord::seeded(now)
        };
        self.store.save_pet(&pet)?;
        info!(pet_id = id.raw(), "Seeded default pet");
        Ok(pet)
    }

    /// Apply the decay owed since the pet was last updated.
    ///
    /// The record is only written back when decay was actually applied.
    pub fn refresh(&self, id: PetId, now: Timestamp) -> Result<PetRecord> {
        let _guard = self.guard();
        let pet = self.require(id)?;
        let outcome = self.decay(&pet, now)?;
        if outcome.report.applied {
            self.store.save_pet(&outcome.pet)?;
        }
        Ok(outcome.pet)
    }

    /// Perform an action on a pet, decaying it first.
    ///
    /// On success the updated pet and its history entry are written in a
    /// single commit. On failure nothing is written, not even the decay.
    pub fn act(
        &self,
        id: PetId,
        action: &str,
        actor: Option<i64>,
        now: Timestamp,
    ) -> Result<ActionOutcome> {
        let _guard = self.guard();
        let pet = self.store.load_pet(id)?;
        let pet = match pet {
            Some(pet) => Some(self.decay(&pet, now)?.pet),
            None => None,
        };

        let outcome = self.engine.perform(pet.as_ref(), action, now)?;
        self.store
            .save_pet_with_action(&outcome.pet, &ActionEntry::from_outcome(&outcome, actor, now))?;

        if outcome.leveled_up {
            info!(
                pet_id = id.raw(),
                level = outcome.pet.level,
                "Pet leveled up"
            );
        }
        debug!(
            pet_id = id.raw(),
            action = %outcome.action,
            exp_gain = outcome.exp_gain,
            "Action applied"
        );
        Ok(outcome)
    }

    /// Most recent actions on a pet, newest first.
    pub fn history(&self, id: PetId, limit: usize) -> Result<Vec<ActionEntry>> {
        self.store.recent_actions(id, limit)
    }

    fn require(&self, id: PetId) -> Result<PetRecord> {
        self.store
            .load_pet(id)?
            .ok_or_else(|| EngineError::InvalidState(format!("no pet record for {id}")).into())
    }

    /// Run elapsed decay and log it. Callers decide whether to save.
    fn decay(&self, pet: &PetRecord, now: Timestamp) -> Result<DecayOutcome> {
        let outcome = self.engine.apply_elapsed_decay(pet, now)?;
        if outcome.report.clock_skew {
            warn!(
                pet_id = pet.id.raw(),
                last_updated = %pet.last_updated,
                %now,
                "Clock behind last update, skipping decay"
            );
        }
        if outcome.report.applied {
            debug!(
                pet_id = pet.id.raw(),
                hours = outcome.report.hours_elapsed,
                hunger = outcome.report.decrease.hunger,
                happiness = outcome.report.decrease.happiness,
                energy = outcome.report.decrease.energy,
                "Decay applied"
            );
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::Arc;
    use std::thread;
    use tamago_core::{ActionKind, RuleSet, Species};

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap()
    }

    fn keeper() -> Keeper {
        Keeper::new(Store::in_memory().unwrap(), Engine::new(RuleSet::default()))
    }

    #[test]
    fn test_act_saves_and_records() {
        let keeper = keeper();
        keeper.adopt(&PetRecord::seeded(t0())).unwrap();

        let outcome = keeper
            .act(PetId::new(1), "feed", Some(1001), t0() + Duration::minutes(1))
            .unwrap();
        assert_eq!(outcome.exp_gain, 9);

        let stored = keeper.store().load_pet(PetId::new(1)).unwrap().unwrap();
        assert_eq!(stored, outcome.pet);

        let history = keeper.history(PetId::new(1), 10).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].action, ActionKind::Feed);
        assert_eq!(history[0].actor, Some(1001));
        assert_eq!(history[0].exp_gain, 9);
    }

    #[test]
    fn test_act_decays_first() {
        let keeper = keeper();
        keeper.adopt(&PetRecord::seeded(t0())).unwrap();

        // cat, 3h: -6 hunger, -4 happiness, -5 energy, then pet: +15 happiness
        let outcome = keeper
            .act(PetId::new(1), "pet", None, t0() + Duration::hours(3))
            .unwrap();
        assert_eq!(outcome.pet.hunger, 74);
        assert_eq!(outcome.pet.happiness, 100);
        assert_eq!(outcome.pet.energy, 70);
    }

    #[test]
    fn test_act_unknown_action_writes_nothing() {
        let keeper = keeper();
        let pet = PetRecord::seeded(t0());
        keeper.adopt(&pet).unwrap();

        let err = keeper
            .act(PetId::new(1), "dance", None, t0() + Duration::hours(5))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Engine(EngineError::UnknownAction(ref token)) if token == "dance"
        ));
        assert_eq!(keeper.store().load_pet(PetId::new(1)).unwrap(), Some(pet));
        assert!(keeper.history(PetId::new(1), 10).unwrap().is_empty());
    }

    #[test]
    fn test_act_without_pet() {
        let keeper = keeper();
        let err = keeper.act(PetId::new(9), "feed", None, t0()).unwrap_err();
        assert!(matches!(err, Error::Engine(EngineError::InvalidState(_))));
    }

    #[test]
    fn test_refresh_debounces() {
        let keeper = keeper();
        let pet = PetRecord::new(PetId::new(5), "Bean", Species::Dog, t0());
        keeper.adopt(&pet).unwrap();

        let same = keeper
            .refresh(PetId::new(5), t0() + Duration::minutes(4))
            .unwrap();
        assert_eq!(same, pet);

        let later = t0() + Duration::hours(2);
        let decayed = keeper.refresh(PetId::new(5), later).unwrap();
        assert_eq!(decayed.hunger, 75);
        assert_eq!(decayed.happiness, 88);
        assert_eq!(decayed.energy, 71);
        assert_eq!(decayed.last_updated, later);
        assert_eq!(keeper.store().load_pet(PetId::new(5)).unwrap(), Some(decayed));
    }

    #[test]
    fn test_refresh_missing_pet() {
        let keeper = keeper();
        let err = keeper.refresh(PetId::new(2), t0()).unwrap_err();
        assert!(matches!(err, Error::Engine(EngineError::InvalidState(_))));
    }

    #[test]
    fn test_load_or_seed() {
        let keeper = keeper();
        let seeded = keeper.load_or_seed(PetId::new(77), t0()).unwrap();
        assert_eq!(seeded.id, PetId::new(77));
        assert_eq!(seeded.name, "Murzik");
        assert_eq!(seeded.experience, 25);

        let again = keeper
            .load_or_seed(PetId::new(77), t0() + Duration::hours(1))
            .unwrap();
        assert_eq!(again, seeded);
    }

    #[test]
    fn test_concurrent_actions_are_serialized() {
        let keeper = Arc::new(keeper());
        keeper
            .adopt(&PetRecord::new(PetId::new(1), "Zed", Species::Cat, t0()))
            .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let keeper = Arc::clone(&keeper);
                thread::spawn(move || {
                    keeper
                        .act(PetId::new(1), "pet", Some(i), t0())
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(keeper.history(PetId::new(1), 100).unwrap().len(), 8);
        let pet = keeper.store().load_pet(PetId::new(1)).unwrap().unwrap();
        // 13 exp per action: the eighth crosses 100 and resets
        assert_eq!(pet.level, 2);
        assert_eq!(pet.experience, 0);
    }
}
