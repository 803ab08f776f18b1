//! # Orchard Infrastructure
//!
//! Infrastructure layer for the Orchard backend: PostgreSQL-backed
//! product persistence and database connection pooling.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::postgres::PgProductRepository;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
