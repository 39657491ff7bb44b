use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Closed integer range `[min, max]` of values a sequence may contain.
///
/// # Invariants
/// - `min <= max` when built through [`Domain::new`]
/// - Immutable for the lifetime of a run
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domain {
	pub min: i64,
	pub max: i64,
}

impl Domain {
	/// Creates a domain, ordering the bounds if they are given reversed.
	pub fn new(min: i64, max: i64) -> Self {
		if min > max {
			Self { min: max, max: min }
		} else {
			Self { min, max }
		}
	}

	/// Number of values in the domain.
	pub fn len(&self) -> usize {
		(self.max - self.min) as usize + 1
	}

	/// A domain always holds at least one value.
	pub fn is_empty(&self) -> bool {
		false
	}

	pub fn contains(&self, value: i64) -> bool {
		(self.min..=self.max).contains(&value)
	}

	/// Dense index of `value`, `None` if outside the domain.
	pub fn index_of(&self, value: i64) -> Option<usize> {
		if self.contains(value) {
			Some((value - self.min) as usize)
		} else {
			None
		}
	}

	/// All values in ascending order.
	pub fn values(&self) -> RangeInclusive<i64> {
		self.min..=self.max
	}

	/// Returns the value preceding `value`, wrapping from `min` to `max`.
	///
	/// This is the step of the availability probe.
	pub fn predecessor(&self, value: i64) -> i64 {
		if value <= self.min { self.max } else { value - 1 }
	}
}
