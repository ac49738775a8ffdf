//! Error types for database operations.

use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Native DB error.
    #[error("Database error: {0}")]
    Database(String),

    /// A stored row could not be turned back into a record.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Pet not found.
    #[error("Pet not found: {0}")]
    NotFound(String),

    /// Rejected by the simulation engine.
    #[error(transparent)]
    Engine(#[from] tamago_core::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, Error>;
