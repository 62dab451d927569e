//! Error types for interchange operations.

use thiserror::Error;

use crate::hir::LoadError;

/// Errors that can occur during model interchange operations.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A document that parsed but does not describe a model.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },

    /// The document's model failed to resolve.
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl InterchangeError {
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create an invalid pointer error.
    pub fn invalid_pointer(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "pointer",
            message: message.into(),
        }
    }

    /// Create an invalid document error.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "document",
            message: message.into(),
        }
    }
}
