//! Class descriptors.

use super::{Decoration, FieldDescriptor, ImportRecord};
use crate::config::ClassMetadata;

/// Base type aggregate-root variants extend.
pub const AGGREGATE_ROOT: &str = "AggregateRoot";

/// Plain-data projection method of an aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// Class the projection is typed as.
    pub target: String,
    /// Fields copied into the projection, in class order.
    pub fields: Vec<String>,
}

/// One derived class variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Class name (model name plus postfix).
    pub name: String,
    /// Name of the model the class was derived from.
    pub model: String,
    /// Fields, in model order.
    pub fields: Vec<FieldDescriptor>,
    /// Class-level decorators.
    pub decorators: Vec<Decoration>,
    /// Base class, if any.
    pub extends: Option<String>,
    /// Free-form source appended after the class (enum registrations).
    pub extra: Option<String>,
    /// Related classes referenced by relation fields.
    pub relation_types: Vec<String>,
    /// Embedded types referenced by object fields.
    pub embedded_types: Vec<String>,
    /// Enum types referenced by enum fields.
    pub enum_types: Vec<String>,
    /// Variant metadata.
    pub metadata: Option<ClassMetadata>,
    /// Projection method, for aggregate roots.
    pub projection: Option<Projection>,
    /// Literal model name returned by the model-name accessor.
    pub model_name_getter: Option<String>,
    /// Resolved imports.
    pub imports: ImportRecord,
}

impl ClassDescriptor {
    /// Field names in class order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check whether a class-level decorator with the given name is attached.
    pub fn has_decorator(&self, name: &str) -> bool {
        self.decorators.iter().any(|d| d.name == name)
    }

    /// Check if this class extends the aggregate-root base type.
    pub fn is_aggregate_root(&self) -> bool {
        self.extends.as_deref() == Some(AGGREGATE_ROOT)
    }
}
