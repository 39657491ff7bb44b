use serde::{Deserialize, Serialize};

use super::quota::QuotaTracker;
use super::random_source::XorShiftSource;

/// How the availability probe treats the previous value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProbeMode {
	/// The probe skips the previous value, so no two adjacent values are equal.
	#[default]
	Strict,
	/// The probe only checks availability. A probed value may repeat the
	/// previous one; reproduces historical outputs.
	Reference,
}

/// Outcome of one slot-fill attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotFill {
	/// The value was committed to the sequence.
	Filled(i64),
	/// Every quota is used up.
	Exhausted,
	/// Only `previous` has quota left and placing it would repeat it.
	Blocked { previous: i64 },
}

/// Builds a fixed-length sequence one slot at a time.
///
/// Each slot draws a candidate from the random source, redraws while it
/// equals the previous value, then probes downward (with wraparound) to the
/// nearest value that still has quota. A committed slot is never revisited.
///
/// # Invariants
/// - The sequence is append-only and never longer than `target`
/// - Each committed value decrements its quota exactly once
/// - Under [`ProbeMode::Strict`], adjacent committed values differ
#[derive(Debug)]
pub struct SequenceBuilder {
	source: XorShiftSource,
	quota: QuotaTracker,
	probe: ProbeMode,
	target: usize,
	position: usize,
	previous: Option<i64>,
	sequence: Vec<i64>,
}

impl SequenceBuilder {
	pub fn new(source: XorShiftSource, quota: QuotaTracker, target: usize, probe: ProbeMode) -> Self {
		Self {
			source,
			quota,
			probe,
			target,
			position: 0,
			previous: None,
			sequence: Vec::with_capacity(target),
		}
	}

	/// Attempts the next slot.
	///
	/// Returns `None` once all `target` slots have been attempted. A slot
	/// that is not filled still counts as attempted: the caller decides
	/// whether that ends the run.
	pub fn fill_slot(&mut self) -> Option<SlotFill> {
		if self.is_complete() {
			return None;
		}
		let outcome = self.draw();
		self.position += 1;
		Some(outcome)
	}

	fn draw(&mut self) -> SlotFill {
		if self.quota.is_exhausted() {
			return SlotFill::Exhausted;
		}
		let domain = self.quota.domain();

		let Some(previous) = self.previous else {
			// First slot: no left neighbour to avoid.
			let candidate = self.source.range(domain.min, domain.max);
			return match self.quota.probe(candidate, None) {
				Some(value) => self.commit(value),
				None => SlotFill::Exhausted,
			};
		};

		// A single-value domain cannot avoid repeating, and redrawing would never end.
		if domain.len() == 1 {
			return SlotFill::Blocked { previous };
		}

		let mut candidate = self.source.range(domain.min, domain.max);
		while candidate == previous {
			candidate = self.source.range(domain.min, domain.max);
		}

		let avoid = match self.probe {
			ProbeMode::Strict => Some(previous),
			ProbeMode::Reference => None,
		};
		match self.quota.probe(candidate, avoid) {
			Some(value) => self.commit(value),
			None => SlotFill::Blocked { previous },
		}
	}

	fn commit(&mut self, value: i64) -> SlotFill {
		self.sequence.push(value);
		self.quota.decrement(value);
		self.previous = Some(value);
		SlotFill::Filled(value)
	}

	/// Number of slots attempted so far.
	pub fn position(&self) -> usize {
		self.position
	}

	/// Number of values committed so far.
	pub fn filled(&self) -> usize {
		self.sequence.len()
	}

	pub fn target(&self) -> usize {
		self.target
	}

	pub fn is_complete(&self) -> bool {
		self.position >= self.target
	}

	pub fn quota(&self) -> &QuotaTracker {
		&self.quota
	}

	pub fn sequence(&self) -> &[i64] {
		&self.sequence
	}

	pub fn into_sequence(self) -> Vec<i64> {
		self.sequence
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::domain::Domain;
	use crate::model::quota::QuotaTable;

	fn builder(seed: u64, min: i64, counts: &[u64], target: usize, probe: ProbeMode) -> SequenceBuilder {
		let max = min + counts.len() as i64 - 1;
		let quota = QuotaTracker::new(&QuotaTable {
			domain: Domain::new(min, max),
			counts: counts.to_vec(),
		});
		SequenceBuilder::new(XorShiftSource::new(seed), quota, target, probe)
	}

	fn drain(builder: &mut SequenceBuilder) -> Vec<SlotFill> {
		std::iter::from_fn(|| builder.fill_slot()).collect()
	}

	#[test]
	fn small_domain_fixture() {
		let mut b = builder(9, 1, &[2, 2, 2, 2], 8, ProbeMode::Strict);
		let outcomes = drain(&mut b);
		assert!(outcomes.iter().all(|o| matches!(o, SlotFill::Filled(_))));
		assert_eq!(b.sequence(), &[1, 3, 4, 2, 1, 3, 4, 2]);
		assert!(b.quota().is_exhausted());
	}

	#[test]
	fn strict_probe_reports_blocked_slot() {
		let mut b = builder(2, 1, &[2, 2, 2, 2], 8, ProbeMode::Strict);
		let outcomes = drain(&mut b);
		assert_eq!(outcomes.last(), Some(&SlotFill::Blocked { previous: 3 }));
		assert_eq!(b.sequence(), &[2, 4, 1, 2, 4, 1, 3]);
		assert_eq!(b.quota().remaining(3), 1);
	}

	#[test]
	fn reference_probe_may_repeat() {
		let mut b = builder(2, 1, &[2, 2, 2, 2], 8, ProbeMode::Reference);
		drain(&mut b);
		assert_eq!(b.into_sequence(), vec![2, 4, 1, 2, 4, 1, 3, 3]);
	}

	#[test]
	fn exhaustion_is_reported_per_slot() {
		let mut b = builder(9, 1, &[1, 1, 1], 5, ProbeMode::Strict);
		let outcomes = drain(&mut b);
		assert_eq!(
			outcomes,
			vec![
				SlotFill::Filled(3),
				SlotFill::Filled(2),
				SlotFill::Filled(1),
				SlotFill::Exhausted,
				SlotFill::Exhausted,
			]
		);
		assert_eq!(b.position(), 5);
		assert_eq!(b.filled(), 3);
	}

	#[test]
	fn single_value_domain_blocks_after_first_slot() {
		let mut b = builder(5, 1, &[3], 3, ProbeMode::Strict);
		let outcomes = drain(&mut b);
		assert_eq!(
			outcomes,
			vec![
				SlotFill::Filled(1),
				SlotFill::Blocked { previous: 1 },
				SlotFill::Blocked { previous: 1 },
			]
		);
	}

	#[test]
	fn zero_quota_value_never_appears() {
		let mut b = builder(9, 1, &[2, 2, 2, 2, 0], 8, ProbeMode::Strict);
		drain(&mut b);
		assert_eq!(b.sequence(), &[4, 2, 1, 2, 4, 1, 3]);
		assert!(!b.sequence().contains(&5));
	}

	#[test]
	fn fill_slot_stops_at_target() {
		let mut b = builder(1, 1, &[10, 10], 3, ProbeMode::Strict);
		assert_eq!(drain(&mut b).len(), 3);
		assert!(b.is_complete());
		assert_eq!(b.fill_slot(), None);
		assert_eq!(b.target(), 3);
	}
}
