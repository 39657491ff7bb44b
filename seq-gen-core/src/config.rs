//! Run configuration.
//!
//! A run is described by a [`GeneratorConfig`], built from (later overrides
//! earlier):
//! 1. Default values (the 997940-value, 1..=20 distribution)
//! 2. A TOML file
//! 3. Command-line flags (applied by the binary)
//!
//! # Example
//!
//! ```toml
//! target_length = 8
//! seed = 9
//! output = "run.output"
//! highlight = 4
//! on_exhaustion = "abort"
//! probe = "strict"
//! quota = [2, 2, 2, 2]
//!
//! [domain]
//! min = 1
//! max = 4
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::builder::ProbeMode;
use crate::model::domain::Domain;
use crate::model::quota::QuotaTable;

/// Quota shared by values 1 through 12 in the default distribution.
pub const DEFAULT_SHARED_QUOTA: u64 = 83_000;

/// Quotas of values 13 through 20 in the default distribution.
pub const DEFAULT_TAIL_QUOTAS: [u64; 8] = [1000, 500, 250, 100, 50, 25, 10, 5];

pub const DEFAULT_TARGET_LENGTH: usize = 997_940;
pub const DEFAULT_OUTPUT: &str = "test.output";
pub const DEFAULT_HIGHLIGHT: i64 = 20;

/// What a run does with a slot that cannot be filled.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExhaustionPolicy {
	/// Leave the slot out and keep going; the output may be shorter than requested.
	#[default]
	Skip,
	/// Stop the run with an error; nothing is written.
	Abort,
}

/// Everything needed to perform one run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
	/// Number of slots to fill.
	pub target_length: usize,

	/// Explicit seed; 0 asks for a time-derived one.
	pub seed: u64,

	/// File the sequence is appended to.
	pub output: PathBuf,

	/// Value reported on the side channel, if any.
	pub highlight: Option<i64>,

	pub on_exhaustion: ExhaustionPolicy,

	pub probe: ProbeMode,

	pub domain: Domain,

	/// One starting count per domain value, ascending.
	pub quota: Vec<u64>,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		let mut quota = vec![DEFAULT_SHARED_QUOTA; 12];
		quota.extend_from_slice(&DEFAULT_TAIL_QUOTAS);
		Self {
			target_length: DEFAULT_TARGET_LENGTH,
			seed: 0,
			output: PathBuf::from(DEFAULT_OUTPUT),
			highlight: Some(DEFAULT_HIGHLIGHT),
			on_exhaustion: ExhaustionPolicy::default(),
			probe: ProbeMode::default(),
			domain: Domain::new(1, 20),
			quota,
		}
	}
}

impl GeneratorConfig {
	/// Loads and validates a configuration file.
	///
	/// # Errors
	/// - `ConfigError::Read` if the file cannot be read
	/// - `ConfigError::Parse` on malformed TOML or unknown keys
	/// - `ConfigError::InvalidValue` if validation fails
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
			path: path.to_path_buf(),
			message: e.to_string(),
		})?;
		config.validate()?;
		Ok(config)
	}

	/// Checks that the quota table matches the domain.
	///
	/// Other values are trusted as given.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.domain.min > self.domain.max {
			return Err(ConfigError::InvalidValue(format!(
				"domain min {} is greater than max {}",
				self.domain.min, self.domain.max
			)));
		}
		if self.quota.len() != self.domain.len() {
			return Err(ConfigError::InvalidValue(format!(
				"quota has {} entries but domain {}..={} has {} values",
				self.quota.len(),
				self.domain.min,
				self.domain.max,
				self.domain.len()
			)));
		}
		Ok(())
	}

	pub fn quota_table(&self) -> QuotaTable {
		QuotaTable {
			domain: self.domain,
			counts: self.quota.clone(),
		}
	}
}
