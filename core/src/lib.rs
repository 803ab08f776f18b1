//! # Orchard Core
//!
//! Core business logic and domain layer for the Orchard backend.
//! This crate contains the domain entities, the token codec, the
//! authentication service, repository and store interfaces, and the
//! error types shared by the outer layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use errors::{DomainError, DomainResult, StorageError, TokenError};
