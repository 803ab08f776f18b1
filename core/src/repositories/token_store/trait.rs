//! Token store trait defining the refresh-token registry interface.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Registry of currently valid refresh tokens
///
/// Login inserts, refresh checks membership, logout removes. Entries are
/// keyed by the hashed token string; presence in the store is a necessary
/// (not sufficient) condition for a refresh token to be usable.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Register a token hash
    ///
    /// Duplicate inserts coalesce (set semantics).
    async fn insert(&self, token_hash: &str) -> Result<(), DomainError>;

    /// Check whether a token hash is currently registered
    async fn contains(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Remove a token hash
    ///
    /// # Returns
    /// * `Ok(true)` - The hash was registered and has been removed
    /// * `Ok(false)` - The hash was not registered
    async fn remove(&self, token_hash: &str) -> Result<bool, DomainError>;
}
