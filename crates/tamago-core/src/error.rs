//! Error types for tamago-core

use crate::species::Species;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation needed a pet record but none exists.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// An action token is outside the action table.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    /// Engine settings that would break the stat or level invariants.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The injected decay table has no row for the pet's species.
    #[error("No decay rule for species: {0}")]
    MissingDecayRule(Species),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
