//! Tamago Script - RON loader for rule tables
//!
//! Loads pet rules from RON files:
//! - Action definitions (stat deltas and base experience per action)
//! - Decay definitions (hourly decay rates per species)
//!
//! The result is a [`tamago_core::RuleSet`] that is handed to the engine.

mod error;
mod loader;
mod schema;

pub use error::{Error, Result};
pub use loader::Loader;
pub use schema::{ActionDef, DecayDef, RuleFile};
