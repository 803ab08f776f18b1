//! Environment-driven configuration.
//!
//! Each config struct owns one deployment concern and is loaded from
//! environment variables with `from_env`. Secrets have no defaults:
//! loading fails if they are absent.

mod auth;
mod database;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

use thiserror::Error;

/// Errors raised while loading configuration from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {name}")]
    MissingVariable { name: &'static str },

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Read a required environment variable
pub(crate) fn require_env(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVariable { name })
}
