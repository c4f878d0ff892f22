//! Class derivation engine.
//!
//! Derivation runs in four layers, each consuming the output of the one below:
//!
//! - [`field`]: builds a field descriptor from one schema field
//! - [`decoration`]: synthesizes documentation and query-exposure decorators
//! - [`planner`]: plans one class variant of a model under a profile
//! - [`walker`]: enumerates every (model, profile) pair the configuration implies
//!
//! Import records are computed by [`imports`] once a class is complete. Schema and
//! configuration travel together in a [`DeriveContext`] that every layer borrows.

pub mod decoration;
pub mod field;
pub mod imports;
pub mod planner;
pub mod primitive;
pub mod walker;

pub use field::{build_field, format_default, FieldOptions};
pub use imports::{parse_relation_placeholder, relation_placeholder, ImportResolver};
pub use planner::ClassPlanner;
pub use walker::SchemaWalker;

use crate::config::GeneratorConfig;
use crate::schema::Schema;

/// Read-only inputs of a derivation run.
#[derive(Debug, Clone, Copy)]
pub struct DeriveContext<'a> {
    /// The introspected schema.
    pub schema: &'a Schema,
    /// The global generator configuration.
    pub config: &'a GeneratorConfig,
}

impl<'a> DeriveContext<'a> {
    /// Create a context over a schema and configuration.
    pub fn new(schema: &'a Schema, config: &'a GeneratorConfig) -> Self {
        Self { schema, config }
    }
}
