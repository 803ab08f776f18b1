//! Error type definitions for token handling and storage.
//!
//! The taxonomy follows the request-authorization contract: a missing
//! credential is distinct from a credential that is present but invalid,
//! and storage failures pass the driver diagnostic through.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// No token was presented at all
    #[error("Authentication token is missing")]
    MissingToken,

    /// Signature verification failed or the token is malformed
    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token expired")]
    TokenExpired,

    /// Refresh token is not registered in the token store
    #[error("Refresh token is not recognized")]
    UnknownRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Persistence failure with the underlying driver diagnostic
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Storage error: {message}")]
pub struct StorageError {
    /// Human-readable description of the failure
    pub message: String,

    /// Underlying driver diagnostic text, when available
    pub detail: Option<String>,
}

impl StorageError {
    /// Create a new storage error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    /// Attach the underlying driver diagnostic
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
