//! Appointment use-case service.
//!
//! # Responsibility
//! - Wrap appointment persistence behind one caller-facing API.

use crate::model::appointment::Appointment;
use crate::repo::appointment_repo::AppointmentRepository;
use crate::repo::RepoResult;

/// Service wrapper for appointment storage.
pub struct AppointmentService<R: AppointmentRepository> {
    repo: R,
}

impl<R: AppointmentRepository> AppointmentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists one appointment through the configured repository.
    pub fn add_appointment(&self, appointment: &Appointment) -> RepoResult<()> {
        self.repo.append_appointment(appointment)
    }

    /// Loads the stored appointment.
    pub fn load_appointment(&self) -> RepoResult<Appointment> {
        self.repo.read_appointment()
    }
}
