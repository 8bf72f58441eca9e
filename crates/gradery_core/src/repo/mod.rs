//! Persistence gateway binding codecs to per-entity data files.
//!
//! # Responsibility
//! - Define append/read contracts for grade and appointment storage.
//! - Normalize every I/O failure into one reportable error that carries the
//!   OS error code and message.
//!
//! # Invariants
//! - File handles are scoped: acquired right before use and released on all
//!   paths, including errors.
//! - The gateway adds no validation of its own; malformed content decodes
//!   per each codec's leniency policy.
//! - I/O failures are recoverable: reported once, operation abandoned,
//!   process continues.

use crate::codec::CodecError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod appointment_repo;
pub mod grade_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failure: either the file system said no, or a codec rejected
/// the stored container shape.
#[derive(Debug)]
pub enum RepoError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Codec(CodecError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => match source.raw_os_error() {
                Some(code) => write!(
                    f,
                    "i/o failure on `{}` (os error {code}): {source}",
                    path.display()
                ),
                None => write!(f, "i/o failure on `{}`: {source}", path.display()),
            },
            Self::Codec(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<CodecError> for RepoError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}
