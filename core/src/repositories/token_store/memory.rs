//! In-process token store backed by a hash set.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::r#trait::TokenStore;
use crate::errors::DomainError;

/// Process-wide set of refresh-token hashes
///
/// State lives in memory only: cleared on restart, never evicted, not
/// shared across instances. A durable implementation can replace this
/// behind the same trait.
#[derive(Default)]
pub struct InMemoryTokenStore {
    tokens: RwLock<HashSet<String>>,
}

impl InMemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered token hashes
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether the store holds no tokens
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn insert(&self, token_hash: &str) -> Result<(), DomainError> {
        self.tokens.write().await.insert(token_hash.to_string());
        Ok(())
    }

    async fn contains(&self, token_hash: &str) -> Result<bool, DomainError> {
        Ok(self.tokens.read().await.contains(token_hash))
    }

    async fn remove(&self, token_hash: &str) -> Result<bool, DomainError> {
        Ok(self.tokens.write().await.remove(token_hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_contains() {
        let store = InMemoryTokenStore::new();
        store.insert("abc").await.unwrap();

        assert!(store.contains("abc").await.unwrap());
        assert!(!store.contains("def").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_inserts_coalesce() {
        let store = InMemoryTokenStore::new();
        store.insert("abc").await.unwrap();
        store.insert("abc").await.unwrap();

        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_reports_membership() {
        let store = InMemoryTokenStore::new();
        store.insert("abc").await.unwrap();

        assert!(store.remove("abc").await.unwrap());
        assert!(!store.remove("abc").await.unwrap());
        assert!(store.is_empty().await);
    }
}
