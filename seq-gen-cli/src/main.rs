mod cli;

use std::io;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use log::info;
use seq_gen_core::config::GeneratorConfig;
use seq_gen_core::io::write_sequence;
use seq_gen_core::model::generator::Generator;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    // Defaults, then the config file, then flags
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    cli.apply(&mut config);

    let generator = Generator::new(&config).context("invalid configuration")?;
    info!("seed {} (pass --seed {} to replay)", generator.seed(), generator.seed());
    let generation = generator.run().context("generation failed")?;

    let stdout = io::stdout();
    let mut report = stdout.lock();
    write_sequence(&config.output, &generation.values, config.highlight, &mut report)
        .context("writing output")?;

    Ok(())
}
