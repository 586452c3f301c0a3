//! Error types for the CAMP platform layer.

use resource_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur while serving platform documents.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CampError {
    /// Building a resource or assembling its document failed.
    #[error(transparent)]
    Framework(#[from] FrameworkError),

    /// No resource of this kind is registered under the id.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// A setting read from the environment was rejected.
    #[error("Invalid configuration {key}: {reason}")]
    Config { key: &'static str, reason: String },

    /// A document could not be rendered as JSON.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CampError {
    fn from(e: serde_json::Error) -> Self {
        CampError::Serialization(e.to_string())
    }
}
