use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read config file '{path}': {source}")]
	Read {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("failed to parse config file '{path}': {message}")]
	Parse { path: PathBuf, message: String },

	#[error("invalid config value: {0}")]
	InvalidValue(String),
}

/// Errors raised by a generation run.
///
/// `QuotaExhaustedPrematurely` and `AdjacencyUnsatisfiable` are only
/// returned under [`ExhaustionPolicy::Abort`](crate::config::ExhaustionPolicy);
/// with the skip policy the run continues and records the skipped slots.
#[derive(Debug, Error)]
pub enum GenerationError {
	#[error("quota exhausted after {filled} of {target} values")]
	QuotaExhaustedPrematurely { filled: usize, target: usize },

	#[error("slot {position} cannot be filled: only {previous} has quota left and it would repeat")]
	AdjacencyUnsatisfiable { position: usize, previous: i64 },

	#[error("failed to write output '{path}': {source}")]
	Persistence {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("failed to write highlight report: {source}")]
	Report { source: std::io::Error },

	#[error(transparent)]
	Config(#[from] ConfigError),
}
