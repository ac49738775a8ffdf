//! Wall-clock time as seen by the engine
//!
//! The engine never reads the clock itself. Callers pass `now` in and the
//! engine measures the gap to the record's `last_updated`:
//! - `Timestamp` - UTC instant
//! - `Elapsed` - non-negative hours between two instants, with a skew flag

use chrono::{DateTime, Utc};

/// A UTC instant
pub type Timestamp = DateTime<Utc>;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Time elapsed between two instants, never negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elapsed {
    /// Elapsed hours (0.0 when the clock went backwards)
    pub hours: f64,
    /// `now` preceded the reference instant
    pub clock_skew: bool,
}

impl Elapsed {
    /// Measure the hours from `since` to `now`.
    ///
    /// A `now` that precedes `since` counts as zero elapsed time.
    pub fn between(since: Timestamp, now: Timestamp) -> Self {
        let millis = (now - since).num_milliseconds();
        if millis < 0 {
            Self {
                hours: 0.0,
                clock_skew: true,
            }
        } else {
            Self {
                hours: millis as f64 / MILLIS_PER_HOUR,
                clock_skew: false,
            }
        }
    }
}
