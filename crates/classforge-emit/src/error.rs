//! Error types for emission.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing generated files.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Creating a directory or writing a file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl EmitError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EmitError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for emission.
pub type EmitResult<T> = Result<T, EmitError>;
