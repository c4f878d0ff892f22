//! Field descriptors.

use super::Decoration;

/// A derived class field, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Resolved target type (after primitive mapping and list wrapping).
    pub type_name: String,
    /// Whether the field may be absent.
    pub nullable: bool,
    /// Default expression, already formatted for the target type.
    pub default: Option<String>,
    /// Decorators, documentation family first.
    pub decorators: Vec<Decoration>,
    /// Emit `= undefined` when nullable and no default is present.
    pub use_undefined_default: bool,
    /// Emit a non-null assertion on required fields.
    pub non_nullable_assertion: bool,
    /// Keep the optional marker even when a default is present.
    pub preserve_default_nullable: bool,
}

impl FieldDescriptor {
    /// Check whether a decorator with the given name is attached.
    pub fn has_decorator(&self, name: &str) -> bool {
        self.decorators.iter().any(|d| d.name == name)
    }

    /// Get an attached decorator by name.
    pub fn decorator(&self, name: &str) -> Option<&Decoration> {
        self.decorators.iter().find(|d| d.name == name)
    }
}
