//! Classforge command-line generator.
//!
//! Reads an introspected schema, derives the configured class variants, and writes
//! one TypeScript file per class.

mod config;

use anyhow::Context;
use clap::Parser;
use classforge_core::{derive_classes, Schema};
use classforge_emit::Emitter;
use config::{Args, RunConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Args::parse().into_config()?;
    for line in run(&config)? {
        println!("{}", line);
    }
    Ok(())
}

/// Execute one generator run.
///
/// Returns the lines to print: class names when listing, otherwise the paths written.
fn run(config: &RunConfig) -> anyhow::Result<Vec<String>> {
    let json = std::fs::read_to_string(&config.schema_path)
        .with_context(|| format!("failed to read schema {}", config.schema_path.display()))?;
    let schema = Schema::from_json(&json)
        .with_context(|| format!("invalid schema {}", config.schema_path.display()))?;

    info!(
        schema = %config.schema_path.display(),
        models = schema.models.len(),
        enums = schema.enums.len(),
        types = schema.types.len(),
        "schema loaded"
    );

    let classes = derive_classes(&schema, &config.generator)?;

    if config.list {
        return Ok(classes.into_iter().map(|c| c.name).collect());
    }

    let written = Emitter::new(&config.output)
        .with_dry_run(config.dry_run)
        .emit(classes)?;
    Ok(written.iter().map(|p| p.display().to_string()).collect())
}
