//! Main authentication service implementation

use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::{DomainResult, TokenError};
use crate::repositories::TokenStore;
use crate::services::token::{TokenCodec, TokenConfig};

/// Session service issuing, validating and revoking token pairs
///
/// Holds one codec per secret plus the injected refresh-token store. The
/// store keeps SHA-256 hashes of refresh tokens; a refresh token is usable
/// only while its hash is registered AND its signature verifies.
pub struct AuthService {
    store: Arc<dyn TokenStore>,
    access_codec: TokenCodec,
    refresh_codec: TokenCodec,
    access_token_ttl: chrono::Duration,
}

impl AuthService {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `store` - Refresh-token registry
    /// * `config` - Secrets and access token lifetime
    pub fn new(store: Arc<dyn TokenStore>, config: TokenConfig) -> Self {
        Self {
            store,
            access_codec: TokenCodec::expiring(&config.access_secret),
            refresh_codec: TokenCodec::non_expiring(&config.refresh_secret),
            access_token_ttl: config.access_token_ttl,
        }
    }

    /// Issue an access/refresh pair for `username` and register the
    /// refresh token
    ///
    /// No credential check is performed: any username is accepted as the
    /// session identity.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The issued pair
    /// * `Err(DomainError)` - Signing or store insertion failed
    pub async fn login(&self, username: &str) -> DomainResult<TokenPair> {
        let access_token = self
            .access_codec
            .sign(&Claims::new_access(username, self.access_token_ttl))?;
        let refresh_token = self.refresh_codec.sign(&Claims::new_refresh(username))?;

        self.store.insert(&hash_token(&refresh_token)).await?;

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Verify an access token and return its claims
    pub fn verify_access(&self, token: &str) -> DomainResult<Claims> {
        Ok(self.access_codec.verify(token)?)
    }

    /// Mint a new access token from a registered refresh token
    ///
    /// Store membership is checked before the signature: a token that was
    /// never issued here, or was logged out, is unknown regardless of who
    /// signed it. The refresh token itself is not rotated.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A fresh access token
    /// * `Err(TokenError::UnknownRefreshToken)` - Not in the store
    /// * `Err(TokenError::InvalidSignature)` - Registered but fails verification
    pub async fn refresh(&self, token: &str) -> DomainResult<String> {
        if !self.store.contains(&hash_token(token)).await? {
            return Err(TokenError::UnknownRefreshToken.into());
        }

        let claims = self.refresh_codec.verify(token)?;
        let access_token = self
            .access_codec
            .sign(&Claims::new_access(claims.name.as_str(), self.access_token_ttl))?;

        Ok(access_token)
    }

    /// Remove a refresh token from the store
    ///
    /// No signature check is performed and removing an unknown token is
    /// not an error.
    pub async fn logout(&self, token: &str) -> DomainResult<()> {
        self.store.remove(&hash_token(token)).await?;
        Ok(())
    }
}

/// Hash a token for store membership
pub(crate) fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
