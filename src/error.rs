//! Custom error types for dirbackup
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for dirbackup operations
#[derive(Error, Debug)]
pub enum BackupError {
    /// Filesystem errors, carried unchanged from the failing primitive
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid arguments (retention limit, target path)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A restore would overwrite the live target directory
    #[error("Target directory already exists: {}", .0.display())]
    TargetExists(PathBuf),
}

impl BackupError {
    /// Create a "not found" error for a backup generation
    pub fn generation_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Generation",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The kind of the underlying filesystem error, if this is one
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io(err) => Some(err.kind()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for BackupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for dirbackup operations
pub type BackupResult<T> = Result<T, BackupError>;
