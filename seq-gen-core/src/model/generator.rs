use log::{debug, info, warn};

use crate::config::{ExhaustionPolicy, GeneratorConfig};
use crate::error::GenerationError;
use crate::model::builder::{ProbeMode, SequenceBuilder, SlotFill};
use crate::model::quota::QuotaTracker;
use crate::model::random_source::XorShiftSource;

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
	/// Committed values, in order.
	pub values: Vec<i64>,
	/// Seed the run started from; replaying it reproduces `values`.
	pub seed: u64,
	/// Requested number of slots.
	pub target: usize,
	/// Slots left out under the skip policy.
	pub skipped: usize,
}

impl Generation {
	/// True if fewer values than requested were produced.
	pub fn is_short(&self) -> bool {
		self.values.len() < self.target
	}
}

/// Run driver.
///
/// Owns the random source, the quota tracker and the sequence builder for a
/// single run. Nothing outlives [`Generator::run`].
#[derive(Debug)]
pub struct Generator {
	builder: SequenceBuilder,
	policy: ExhaustionPolicy,
	probe: ProbeMode,
	seed: u64,
}

impl Generator {
	/// Wires the components from `config`.
	///
	/// # Errors
	/// Returns `GenerationError::Config` if the configuration does not validate.
	pub fn new(config: &GeneratorConfig) -> Result<Self, GenerationError> {
		config.validate()?;

		let source = XorShiftSource::new(config.seed);
		let seed = source.seed();
		let quota = QuotaTracker::new(&config.quota_table());
		let builder = SequenceBuilder::new(source, quota, config.target_length, config.probe);

		Ok(Self {
			builder,
			policy: config.on_exhaustion,
			probe: config.probe,
			seed,
		})
	}

	/// Seed the run will start from.
	pub fn seed(&self) -> u64 {
		self.seed
	}

	/// Fills every slot, applying the exhaustion policy to unfilled ones.
	///
	/// # Errors
	/// Under [`ExhaustionPolicy::Abort`]:
	/// - `QuotaExhaustedPrematurely` when all quotas run out before the target
	/// - `AdjacencyUnsatisfiable` when only the previous value has quota left
	pub fn run(mut self) -> Result<Generation, GenerationError> {
		info!(
			"generating {} values (seed {}, {:?} probe, {:?} on exhaustion)",
			self.builder.target(),
			self.seed,
			self.probe,
			self.policy
		);

		let mut skipped = 0;
		let mut first_unfilled: Option<(usize, SlotFill)> = None;

		while let Some(outcome) = self.builder.fill_slot() {
			let position = self.builder.position() - 1;
			if let SlotFill::Filled(_) = outcome {
				continue;
			}

			if self.policy == ExhaustionPolicy::Abort {
				return Err(match outcome {
					SlotFill::Blocked { previous } => GenerationError::AdjacencyUnsatisfiable { position, previous },
					_ => GenerationError::QuotaExhaustedPrematurely {
						filled: self.builder.filled(),
						target: self.builder.target(),
					},
				});
			}

			if first_unfilled.is_none() {
				first_unfilled = Some((position, outcome));
			}
			skipped += 1;
		}

		if let Some((position, outcome)) = first_unfilled {
			warn!(
				"skipped {} of {} slots, first at slot {} ({:?})",
				skipped,
				self.builder.target(),
				position,
				outcome
			);
		}

		let quota = self.builder.quota();
		for value in quota.domain().values() {
			debug!("value {}: {} left", value, quota.remaining(value));
		}

		let target = self.builder.target();
		Ok(Generation {
			values: self.builder.into_sequence(),
			seed: self.seed,
			target,
			skipped,
		})
	}
}
