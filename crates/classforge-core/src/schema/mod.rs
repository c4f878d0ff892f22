//! Introspected schema model.
//!
//! The schema describes models, their fields, relation edges, embedded types and
//! enumerations exactly as the introspection tool reports them. It is read-only input
//! to the derivation engine.

mod bundle;
mod field;
mod model;
mod types;

pub use bundle::{EnumDef, EnumValue, Schema};
pub use field::FieldDef;
pub use model::ModelDef;
pub use types::{DefaultFunction, DefaultValue, FieldKind, ScalarValue};
