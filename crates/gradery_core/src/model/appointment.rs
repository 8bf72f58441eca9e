//! Appointment record.
//!
//! # Responsibility
//! - Define the calendar record consumed by the ics subset codec.
//!
//! # Invariants
//! - `start <= end` is NOT enforced here or in the codec; the record is
//!   purely structural and ordering is the caller's responsibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One upcoming appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Appointment {
    /// Creates a point appointment; `end` defaults to `start`.
    pub fn new(name: impl Into<String>, start: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            start,
            end: start,
        }
    }

    /// Creates a ranged appointment with a distinct end timestamp.
    pub fn with_end(name: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }
}
