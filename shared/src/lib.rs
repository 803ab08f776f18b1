//! # Orchard Shared
//!
//! Cross-cutting types for the Orchard backend: environment-driven
//! configuration and shared API response types.

pub mod config;
pub mod types;

pub use config::{AuthConfig, ConfigError, DatabaseConfig, ServerConfig};
pub use types::response::ErrorResponse;
