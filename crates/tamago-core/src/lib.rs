//! Tamago Core - Pet-state simulation engine
//!
//! This crate provides the pure rules behind a persistent virtual pet:
//! - The pet record (`PetRecord`) with clamped stats, level and experience
//! - Action rules (`ActionRules`) mapping feed/play/sleep/pet to stat deltas
//! - Decay rules (`DecayRules`) mapping species to hourly stat decay
//! - The `Engine`, which applies actions and elapsed-time decay
//! - A read-only mood projection (`describe`)
//!
//! ## Determinism
//!
//! The engine never reads the wall clock and never performs I/O. Every
//! operation takes the current record plus an explicit `now` and returns a
//! new record, so identical inputs always produce identical outputs.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tamago_core::{ActionKind, Engine, PetId, PetRecord, RuleSet, Species};
//!
//! let born = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
//! let pet = PetRecord::new(PetId::new(7), "Biscuit", Species::Dog, born);
//!
//! let engine = Engine::new(RuleSet::default());
//! let outcome = engine.apply_action(Some(&pet), ActionKind::Feed, born).unwrap();
//! assert_eq!(outcome.pet.hunger, 100);
//! assert_eq!(outcome.exp_gain, 5 + 95 / 20);
//! ```

mod action;
mod config;
mod decay;
mod describe;
mod engine;
mod error;
mod identity;
mod pet;
mod rules;
mod species;
mod store;
mod time;

pub use action::{ActionKind, ActionRule, ActionRules};
pub use config::EngineConfig;
pub use decay::{DecayRule, DecayRules};
pub use describe::{describe, Condition, Description};
pub use engine::{ActionOutcome, DecayOutcome, DecayReport, Engine};
pub use error::{Error, Result};
pub use identity::PetId;
pub use pet::{PetRecord, StatChange};
pub use rules::RuleSet;
pub use species::Species;
pub use store::PetStore;
pub use time::{Elapsed, Timestamp};
