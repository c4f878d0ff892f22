//! Primitive type mapping.

use crate::schema::{FieldDef, FieldKind};

/// Declared primitive type → target type.
pub const PRIMITIVE_TYPES: &[(&str, &str)] = &[
    ("Int", "number"),
    ("String", "string"),
    ("DateTime", "Date"),
    ("Boolean", "boolean"),
    ("Json", "object"),
    ("BigInt", "BigInt"),
    ("Float", "number"),
    ("Decimal", "number"),
    ("Bytes", "Buffer"),
];

/// Map a scalar field to its target type.
///
/// Returns `None` for relations, enums, embedded objects and scalar names that are
/// not in the table; callers pass the declared type through in that case.
pub fn map_primitive(field: &FieldDef) -> Option<&'static str> {
    if field.kind != FieldKind::Scalar {
        return None;
    }
    PRIMITIVE_TYPES
        .iter()
        .find(|(declared, _)| *declared == field.type_name)
        .map(|(_, target)| *target)
}

/// Uppercase the first character.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Wrap a type as a sequence of that type.
pub fn arrayify(type_name: &str) -> String {
    format!("{}[]", type_name)
}
