//! Model definitions.

use super::field::FieldDef;
use serde::{Deserialize, Serialize};

/// A model (or embedded type) definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDef {
    /// Model name (unique within schema).
    pub name: String,
    /// Field definitions, in declaration order.
    pub fields: Vec<FieldDef>,
}

impl ModelDef {
    /// Create a new model definition without fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field to the model.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Add multiple fields.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all relation fields.
    pub fn relation_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_relation())
    }

    /// Check whether a field refers back to this model.
    pub fn is_self_reference(&self, field: &FieldDef) -> bool {
        field.type_name == self.name
    }
}
