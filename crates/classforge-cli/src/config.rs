//! Command-line configuration.

use anyhow::Context;
use clap::Parser;
use classforge_core::GeneratorConfig;
use std::path::PathBuf;

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./generated";

/// Resolved settings of one generator run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Introspection schema document.
    pub schema_path: PathBuf,
    /// Directory generated files are written under.
    pub output: PathBuf,
    /// Log destinations without writing.
    pub dry_run: bool,
    /// Print derived class names instead of writing.
    pub list: bool,
    /// Derivation settings.
    pub generator: GeneratorConfig,
}

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "classforge")]
#[command(version, about = "Generate decorated classes from an introspected data model", long_about = None)]
pub struct Args {
    /// Path to the introspection schema (JSON).
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Path to a generator configuration file (JSON).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Log the files that would be written without touching disk.
    #[arg(long)]
    pub dry_run: bool,

    /// Print derived class names and exit.
    #[arg(long)]
    pub list: bool,

    /// Attach documentation decorators.
    #[arg(long)]
    pub use_swagger: bool,

    /// Attach query-exposure decorators.
    #[arg(long)]
    pub use_graphql: bool,

    /// Split relation fields into separate classes.
    #[arg(long)]
    pub separate_relation_fields: bool,

    /// Generate aggregate-root classes.
    #[arg(long)]
    pub create_aggregate_root: bool,

    /// Generate deep-relation classes.
    #[arg(long)]
    pub enable_deep_relations: bool,
}

impl Args {
    /// Load the configuration file, if any, and apply command-line overrides.
    ///
    /// Override flags only switch options on; an option enabled in the file stays on.
    pub fn into_config(self) -> anyhow::Result<RunConfig> {
        let mut generator = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                GeneratorConfig::from_json(&json)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => GeneratorConfig::default(),
        };

        generator.use_swagger |= self.use_swagger;
        generator.use_graphql |= self.use_graphql;
        generator.separate_relation_fields |= self.separate_relation_fields;
        generator.create_aggregate_root |= self.create_aggregate_root;
        generator.enable_deep_relations |= self.enable_deep_relations;

        Ok(RunConfig {
            schema_path: self.schema,
            output: self.output,
            dry_run: self.dry_run,
            list: self.list,
            generator,
        })
    }
}
