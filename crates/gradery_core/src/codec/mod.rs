//! Hand-rolled on-disk formats for grade and appointment records.
//!
//! # Responsibility
//! - Translate records to/from their text encodings without touching files.
//! - Keep the two-tier leniency policy in one place: container-shape
//!   violations fail loudly, field-content violations degrade to defaults.
//!
//! # Invariants
//! - Codecs are pure: record in, string out (and vice versa), no shared state.
//! - Structural errors (`InvalidKey`, `InvalidLength`, `NotAValidBlock`) are
//!   never coerced into a default record.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod grade_line;
pub mod ics;
pub mod transposition;

pub type CodecResult<T> = Result<T, CodecError>;

/// Structural codec failure. Field-level parse problems are not errors;
/// they resolve to documented defaults inside the individual codecs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Cipher key is zero or negative.
    InvalidKey { key: i32 },
    /// Ciphertext length is not divisible by the cipher key.
    InvalidLength { length: usize, key: i32 },
    /// Calendar block is missing its BEGIN/END markers.
    NotAValidBlock,
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey { key } => {
                write!(f, "cipher key must be positive, got {key}")
            }
            Self::InvalidLength { length, key } => write!(
                f,
                "ciphertext length {length} is not divisible by cipher key {key}"
            ),
            Self::NotAValidBlock => {
                write!(f, "not a valid calendar block: BEGIN/END:VCALENDAR missing")
            }
        }
    }
}

impl Error for CodecError {}
