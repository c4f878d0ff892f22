//! Core type definitions for the introspected schema.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared kind of a schema field, as reported by the introspection tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// A primitive value (`Int`, `String`, `DateTime`, ...).
    Scalar,
    /// A reference to another model (relation) or to an embedded type.
    Object,
    /// An enumeration value.
    Enum,
    /// A database type the introspection tool could not classify.
    Unsupported,
}

/// A single scalar default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// Boolean literal.
    Bool(bool),
    /// Numeric literal, kept in its original textual form.
    Number(serde_json::Number),
    /// String literal (also used for enum value names).
    String(String),
}

/// A generator-function default such as `autoincrement()` or `now()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultFunction {
    /// Function name.
    pub name: String,
    /// Function arguments.
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
}

/// Default value declared on a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// A single scalar.
    Scalar(ScalarValue),
    /// A list of scalars (for list-valued fields).
    List(Vec<ScalarValue>),
    /// A generator function, evaluated by the database.
    Function(DefaultFunction),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Number(n) => write!(f, "{}", n),
            ScalarValue::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Number(value.into())
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

impl DefaultValue {
    /// Create a scalar default.
    pub fn scalar(value: impl Into<ScalarValue>) -> Self {
        DefaultValue::Scalar(value.into())
    }

    /// Create a list default.
    pub fn list<V: Into<ScalarValue>>(values: impl IntoIterator<Item = V>) -> Self {
        DefaultValue::List(values.into_iter().map(Into::into).collect())
    }

    /// Create a generator-function default with no arguments.
    pub fn function(name: impl Into<String>) -> Self {
        DefaultValue::Function(DefaultFunction {
            name: name.into(),
            args: Vec::new(),
        })
    }
}
