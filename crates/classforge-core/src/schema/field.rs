//! Field definitions for models.

use super::types::{DefaultValue, FieldKind};
use serde::{Deserialize, Serialize};

/// A field definition within a model or embedded type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Declared kind.
    pub kind: FieldKind,
    /// Declared type name (primitive name, model name, enum name or type name).
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether the field holds a list of values.
    #[serde(default)]
    pub is_list: bool,
    /// Whether the field is required (non-nullable).
    #[serde(default)]
    pub is_required: bool,
    /// Whether the field is the model's identifier.
    #[serde(default)]
    pub is_id: bool,
    /// Relation name for relation fields.
    #[serde(default)]
    pub relation_name: Option<String>,
    /// Default value if one is declared.
    #[serde(default)]
    pub default: Option<DefaultValue>,
}

impl FieldDef {
    /// Create a required field of the given kind.
    pub fn new(name: impl Into<String>, kind: FieldKind, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            type_name: type_name.into(),
            is_list: false,
            is_required: true,
            is_id: false,
            relation_name: None,
            default: None,
        }
    }

    /// Create a required scalar field.
    pub fn scalar(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar, type_name)
    }

    /// Create a required enum field.
    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Enum, enum_name)
    }

    /// Create a required relation field pointing at `model`.
    pub fn relation(
        name: impl Into<String>,
        model: impl Into<String>,
        relation_name: impl Into<String>,
    ) -> Self {
        Self {
            relation_name: Some(relation_name.into()),
            ..Self::new(name, FieldKind::Object, model)
        }
    }

    /// Create a required embedded-object field.
    pub fn embedded(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Object, type_name)
    }

    /// Mark the field as optional (required = false).
    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    /// Mark the field as list-valued.
    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    /// Mark the field as the identifier.
    pub fn id(mut self) -> Self {
        self.is_id = true;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Check if this field is a relation to another model.
    pub fn is_relation(&self) -> bool {
        self.relation_name.is_some()
    }

    /// Check if this field is an embedded object (object kind without relation).
    pub fn is_embedded(&self) -> bool {
        self.kind == FieldKind::Object && self.relation_name.is_none()
    }

    /// Check if this field is an enum.
    pub fn is_enum(&self) -> bool {
        self.kind == FieldKind::Enum
    }

    /// Check if this field has a default value.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}
