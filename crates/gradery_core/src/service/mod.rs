//! Use-case services over the repository contracts.
//!
//! # Responsibility
//! - Provide stable entry points for callers (CLI, embedding apps).
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Services are constructed once at process start and passed explicitly
//!   to consumers; there is no ambient global lookup.

pub mod appointment_service;
pub mod grade_service;
