//! Database models for persistent storage.

mod action;
mod pet;

pub use action::*;
pub use pet::*;

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use tamago_core::Timestamp;

/// Timestamps are stored as whole seconds since the Unix epoch plus the
/// sub-second nanoseconds, so they load back exactly.
pub(crate) fn to_parts(at: Timestamp) -> (i64, u32) {
    (at.timestamp(), at.timestamp_subsec_nanos())
}

pub(crate) fn from_parts(secs: i64, nanos: u32) -> Result<Timestamp> {
    DateTime::<Utc>::from_timestamp(secs, nanos)
        .ok_or_else(|| Error::Serialization(format!("timestamp out of range: {secs}s {nanos}ns")))
}
