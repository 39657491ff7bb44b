use serde::{Deserialize, Serialize};

use super::domain::Domain;

/// Starting quota for every value of a domain.
///
/// `counts[i]` is the quota of `domain.min + i`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QuotaTable {
	pub domain: Domain,
	pub counts: Vec<u64>,
}

impl QuotaTable {
	/// Sum of all starting counts: the longest sequence the table allows.
	pub fn total(&self) -> u64 {
		self.counts.iter().sum()
	}
}

/// Remaining-use counters over a fixed domain.
///
/// # Responsibilities
/// - Answer availability queries for a value
/// - Record a committed value with a saturating decrement
/// - Detect global exhaustion
/// - Probe for the nearest available value below a candidate
///
/// # Invariants
/// - Counters never go negative
/// - Values outside the domain are never available
#[derive(Clone, Debug)]
pub struct QuotaTracker {
	domain: Domain,
	remaining: Vec<u64>,
}

impl QuotaTracker {
	/// Initializes the counters from `table`.
	///
	/// Domain values missing from a short `counts` list start at 0.
	pub fn new(table: &QuotaTable) -> Self {
		let mut remaining = vec![0; table.domain.len()];
		for (slot, count) in remaining.iter_mut().zip(&table.counts) {
			*slot = *count;
		}
		Self { domain: table.domain, remaining }
	}

	pub fn domain(&self) -> Domain {
		self.domain
	}

	/// Remaining uses of `value` (0 outside the domain).
	pub fn remaining(&self, value: i64) -> u64 {
		self.domain.index_of(value).map_or(0, |i| self.remaining[i])
	}

	/// Remaining uses across the whole domain.
	pub fn total_remaining(&self) -> u64 {
		self.remaining.iter().sum()
	}

	/// Records one use of `value`.
	///
	/// Saturating: a counter already at 0 stays at 0.
	pub fn decrement(&mut self, value: i64) {
		if let Some(i) = self.domain.index_of(value) {
			self.remaining[i] = self.remaining[i].saturating_sub(1);
		}
	}

	/// True iff `value` has at least one use left.
	pub fn available(&self, value: i64) -> bool {
		self.remaining(value) > 0
	}

	/// True iff **every** value has 0 uses left.
	pub fn is_exhausted(&self) -> bool {
		self.remaining.iter().all(|count| *count == 0)
	}

	/// Walks from `candidate` through its predecessors (wrapping from `min`
	/// to `max`) and returns the first available value that is not `avoid`.
	///
	/// Visits each domain value at most once. Returns `None` when no value
	/// qualifies.
	pub fn probe(&self, candidate: i64, avoid: Option<i64>) -> Option<i64> {
		let mut value = candidate;
		for _ in 0..self.domain.len() {
			if self.available(value) && Some(value) != avoid {
				return Some(value);
			}
			value = self.domain.predecessor(value);
		}
		None
	}
}
