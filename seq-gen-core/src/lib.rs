//! Constrained integer sequence generation library.
//!
//! This crate generates fixed-length integer sequences that satisfy:
//! - a per-value frequency quota
//! - no two adjacent elements being equal
//! - a deterministic replay given an explicit seed
//!
//! The generation core (random source, quota tracking, sequence building)
//! lives in [`model`]. Configuration, errors and the output artifact are
//! kept in their own modules so the core stays free of I/O.

/// Random source, quota tracking and sequence construction.
pub mod model;

/// Run configuration (TOML, serde).
pub mod config;

/// Error types shared by the library.
pub mod error;

/// Output artifact and highlight reporting.
pub mod io;
