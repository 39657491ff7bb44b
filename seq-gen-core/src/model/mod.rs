//! Top-level module for the constrained sequence generator.
//!
//! Components, leaves first:
//! - The value domain (`Domain`)
//! - A xorshift pseudo-random source (`XorShiftSource`)
//! - Per-value quota accounting (`QuotaTracker`)
//! - Slot-by-slot construction (`SequenceBuilder`)
//! - The run driver wiring them together (`Generator`)

/// Dense inclusive integer range of permissible values.
pub mod domain;

/// 64-bit xorshift generator with explicit, inspectable state.
///
/// Provides raw 63-bit draws and inclusive range draws, and plugs into
/// the `rand` traits.
pub mod random_source;

/// Remaining-use counters over the domain.
///
/// Supports availability checks, saturating decrements, exhaustion
/// detection and the wraparound probe.
pub mod quota;

/// Single-pass sequence construction under the quota and adjacency
/// constraints.
pub mod builder;

/// Run driver: owns the components for one run and applies the
/// exhaustion policy.
pub mod generator;
