//! Crate-wide error type for hosting composition and provisioning seams.

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced while composing a hosting declaration or by a
/// provisioning capability implementation.
///
/// The composition core performs no retries and no recovery; apply-time
/// failures (missing zone, certificate validation timeout) belong to
/// whichever engine implements the capability traits and are surfaced
/// verbatim through [`HostingError::Provisioning`].
#[derive(Debug, Error)]
pub enum HostingError {
    #[error("validation error: {message}")]
    Validation { message: String, details: Value },

    #[error("not found: {message}")]
    NotFound { message: String, details: Value },

    #[error("provisioning error: {message}")]
    Provisioning { message: String, details: Value },

    #[error("internal error: {message}")]
    Internal { message: String, details: Value },
}

impl HostingError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn provisioning(message: impl Into<String>, details: Value) -> Self {
        Self::Provisioning {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}
