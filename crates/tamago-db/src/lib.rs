//! Tamago DB - Database layer using native_db
//!
//! Provides persistent storage for:
//! - Pet records (implements [`tamago_core::PetStore`])
//! - The history of actions performed on each pet
//!
//! [`Keeper`] sits on top of a [`Store`] and an engine and serializes every
//! read-modify-write against a pet, so concurrent callers cannot lose
//! updates.

mod error;
mod history;
mod keeper;
mod models;
mod queries;
mod store;

pub use error::{Error, Result};
pub use history::ActionEntry;
pub use keeper::Keeper;
pub use store::Store;
