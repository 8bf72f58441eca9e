//! Core codec and persistence logic for Gradery.
//! This crate is the single source of truth for the on-disk record formats.

pub mod codec;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use codec::{CodecError, CodecResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::appointment::Appointment;
pub use model::grade::{
    word_grade_for, Certifiable, CertificateBook, CertificateGrade, Grade, Subject,
    WeightedGradeSet,
};
pub use model::user::{User, UserRole};
pub use repo::appointment_repo::{AppointmentRepository, IcsFileAppointmentRepository};
pub use repo::grade_repo::{GradeRepository, TextFileGradeRepository};
pub use repo::{RepoError, RepoResult};
pub use service::appointment_service::AppointmentService;
pub use service::grade_service::GradeService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
