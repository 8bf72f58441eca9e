//! Domain model for grade and appointment records.
//!
//! # Responsibility
//! - Define the plain record values the codec layer consumes and produces.
//! - Keep records flat and serializer-friendly: primitive leaf values, no
//!   cycles, stable external field names.
//!
//! # Invariants
//! - Records are immutable from the codec layer's point of view; codecs
//!   never mutate a record in place.

pub mod appointment;
pub mod grade;
pub mod user;
