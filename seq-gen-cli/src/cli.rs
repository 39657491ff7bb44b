use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use seq_gen_core::config::{ExhaustionPolicy, GeneratorConfig};
use seq_gen_core::model::builder::ProbeMode;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OnExhaustion {
    /// Leave unfillable slots out and keep going
    Skip,
    /// Stop with an error and write nothing
    Abort,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Probe {
    /// Never place the same value twice in a row
    Strict,
    /// Only check quota while probing (may repeat)
    Reference,
}

#[derive(Parser, Debug)]
#[command(name = "seq-gen")]
#[command(version, about = "Generate a quota-constrained sequence with no adjacent repeats")]
pub struct Cli {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,
    #[arg(long, help = "Explicit seed (0 derives one from the clock)")]
    pub seed: Option<u64>,
    #[arg(long, help = "Number of values to generate")]
    pub length: Option<usize>,
    #[arg(long, short, help = "File to append the sequence to")]
    pub output: Option<PathBuf>,
    #[arg(long, help = "Value to echo on stdout each time it is written", conflicts_with = "no_highlight")]
    pub highlight: Option<i64>,
    #[arg(long, help = "Disable highlight reporting", default_value_t = false)]
    pub no_highlight: bool,
    #[arg(long, value_enum, help = "What to do when a slot cannot be filled")]
    pub on_exhaustion: Option<OnExhaustion>,
    #[arg(long, value_enum, help = "Probe mode for values that ran out of quota")]
    pub probe: Option<Probe>,
    #[arg(long, short, help = "Verbose output", default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Applies the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(length) = self.length {
            config.target_length = length;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if self.no_highlight {
            config.highlight = None;
        } else if let Some(highlight) = self.highlight {
            config.highlight = Some(highlight);
        }
        if let Some(policy) = self.on_exhaustion {
            config.on_exhaustion = match policy {
                OnExhaustion::Skip => ExhaustionPolicy::Skip,
                OnExhaustion::Abort => ExhaustionPolicy::Abort,
            };
        }
        if let Some(probe) = self.probe {
            config.probe = match probe {
                Probe::Strict => ProbeMode::Strict,
                Probe::Reference => ProbeMode::Reference,
            };
        }
    }
}
