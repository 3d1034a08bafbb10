#![doc = include_str!("../README.md")]

mod config;
mod output;
mod telemetry;

use std::io::{BufWriter, Write};

use clap::Parser;
use config::{CliArgs, Config, Strategy};
use output::write_identifier;
use siteid::{
    DefaultGenerator, Identifier, OsRandomUuid, SiteIdGenerator, SourceError, ThreadRandom,
    WallClock,
};
use telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_tracing();
    log_startup_info(&config);

    let generator = build_generator(config.strategy);
    let mut out = BufWriter::new(std::io::stdout().lock());
    for _ in 0..config.count {
        let id = generate_logged(&generator);
        write_identifier(&mut out, &id, config.format)?;
    }
    out.flush()?;

    tracing::debug!(count = config.count, "done");
    Ok(())
}

fn log_startup_info(config: &Config) {
    if cfg!(debug_assertions) {
        tracing::debug!("Generating identifiers with full config: {:#?}", config);
    } else {
        tracing::debug!(
            "Generating {} identifier(s) with strategy {:?}",
            config.count,
            config.strategy
        );
    }
}

fn build_generator(strategy: Strategy) -> DefaultGenerator {
    let source = match strategy {
        Strategy::Auto => Some(OsRandomUuid),
        Strategy::Fallback => None,
    };
    SiteIdGenerator::new(source, WallClock, ThreadRandom)
}

/// Generates one identifier and reports why the strong source was skipped.
///
/// The library absorbs source failures silently; this is the layer that
/// decides they are worth a log line.
fn generate_logged(generator: &DefaultGenerator) -> Identifier {
    match generator.try_standard() {
        Ok(id) => id,
        Err(SourceError::Absent) => generator.fallback().into(),
        Err(err) => {
            tracing::warn!(reason = %err, "strong source failed, using fallback identifier");
            generator.fallback().into()
        }
    }
}
