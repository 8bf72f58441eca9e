//! Appointment persistence over the calendar subset format.
//!
//! # Responsibility
//! - Append encoded calendar blocks to a per-user `.ics` file and read one
//!   appointment back.
//!
//! # Invariants
//! - Structural block failures (`NotAValidBlock`) propagate to the caller;
//!   they are never masked as a default record.
//! - With multiple concatenated blocks in one file, the property scan's
//!   last-write-wins rule means the final block's values prevail.

use crate::codec::ics;
use crate::model::appointment::Appointment;
use crate::repo::{RepoError, RepoResult};
use log::{error, info};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

const APPOINTMENT_FILE_SUFFIX: &str = "_appointment.ics";

/// Append/read contract for appointment storage.
pub trait AppointmentRepository {
    /// Appends one appointment block. On failure nothing is persisted.
    fn append_appointment(&self, appointment: &Appointment) -> RepoResult<()>;

    /// Reads one appointment back from the file's block content.
    fn read_appointment(&self) -> RepoResult<Appointment>;
}

/// File-backed appointment repository over the calendar subset format.
pub struct IcsFileAppointmentRepository {
    path: PathBuf,
}

impl IcsFileAppointmentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository for a user's appointment file
    /// (`<username>_appointment.ics`) inside `dir`.
    pub fn for_user(dir: impl AsRef<Path>, username: &str) -> Self {
        Self::new(
            dir.as_ref()
                .join(format!("{username}{APPOINTMENT_FILE_SUFFIX}")),
        )
    }

    fn io_error(&self, source: std::io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn try_append(&self, appointment: &Appointment) -> RepoResult<()> {
        let block = ics::encode(appointment);
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;
        file.write_all(block.as_bytes())
            .map_err(|source| self.io_error(source))
    }

    fn try_read(&self) -> RepoResult<Appointment> {
        let content = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        Ok(ics::decode(&content)?)
    }
}

impl AppointmentRepository for IcsFileAppointmentRepository {
    fn append_appointment(&self, appointment: &Appointment) -> RepoResult<()> {
        let started_at = Instant::now();
        match self.try_append(appointment) {
            Ok(()) => {
                info!(
                    "event=appointment_append module=repo status=ok path={} duration_ms={}",
                    self.path.display(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=appointment_append module=repo status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn read_appointment(&self) -> RepoResult<Appointment> {
        let started_at = Instant::now();
        match self.try_read() {
            Ok(appointment) => {
                info!(
                    "event=appointment_read module=repo status=ok path={} duration_ms={}",
                    self.path.display(),
                    started_at.elapsed().as_millis()
                );
                Ok(appointment)
            }
            Err(err) => {
                error!(
                    "event=appointment_read module=repo status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
