//! Core error types.

use thiserror::Error;

/// Errors raised while loading input or deriving class descriptors.
#[derive(Debug, Error)]
pub enum DeriveError {
    /// A model or embedded type declares no fields.
    #[error("model '{model}' has no fields")]
    EmptyModel {
        /// Name of the offending model.
        model: String,
    },

    /// A field has an empty name.
    #[error("model '{model}' has a field without a name (position {position})")]
    UnnamedField {
        /// Name of the owning model.
        model: String,
        /// Zero-based position of the field in the model.
        position: usize,
    },

    /// Schema or configuration document could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias for derivation.
pub type DeriveResult<T> = Result<T, DeriveError>;
