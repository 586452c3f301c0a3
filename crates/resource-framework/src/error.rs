//! # Framework Errors
//!
//! This module defines the common error types used throughout the resource framework.
//! All three kinds describe programmer or configuration defects, so nothing here is
//! retried; callers propagate them with `?`.

/// Errors that can occur while building resources or assembling their DTOs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    /// A builder was read or written after `build()` sealed it.
    #[error("Builder for {builder} used after build")]
    IllegalUse { builder: &'static str },

    /// The URI context has no route for a resource type or endpoint.
    #[error("No URI route registered for `{target}`")]
    UnresolvableLink { target: String },

    /// A setter argument was rejected before it reached the resource.
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
}

impl FrameworkError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        FrameworkError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn unresolvable(target: impl Into<String>) -> Self {
        FrameworkError::UnresolvableLink {
            target: target.into(),
        }
    }
}
