//! Domain-specific error types and error handling.

mod types;

pub use types::{StorageError, TokenError};

use thiserror::Error;

/// Core domain errors
///
/// HTTP status mapping happens at the handler boundary in the API layer.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type DomainResult<T> = Result<T, DomainError>;
