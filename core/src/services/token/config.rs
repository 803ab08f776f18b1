//! Configuration for token signing and verification

use chrono::Duration;

use crate::domain::entities::token::ACCESS_TOKEN_EXPIRY_SECONDS;

/// Configuration for the token codecs
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Secret for signing and verifying access tokens
    pub access_secret: String,

    /// Secret for signing and verifying refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime
    pub access_token_ttl: Duration,
}

impl TokenConfig {
    /// Create a configuration with the default access token lifetime
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_token_ttl: Duration::seconds(ACCESS_TOKEN_EXPIRY_SECONDS),
        }
    }

    /// Set the access token lifetime
    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }
}

impl From<&orchard_shared::AuthConfig> for TokenConfig {
    fn from(config: &orchard_shared::AuthConfig) -> Self {
        TokenConfig::new(&config.access_secret, &config.refresh_secret)
            .with_access_token_ttl(Duration::seconds(config.access_token_ttl_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_fifteen_seconds() {
        let config = TokenConfig::new("access", "refresh");
        assert_eq!(config.access_token_ttl, Duration::seconds(15));
    }

    #[test]
    fn test_from_shared_auth_config() {
        let shared = orchard_shared::AuthConfig::new("a", "r").with_access_token_ttl(30);
        let config = TokenConfig::from(&shared);

        assert_eq!(config.access_secret, "a");
        assert_eq!(config.refresh_secret, "r");
        assert_eq!(config.access_token_ttl, Duration::seconds(30));
    }
}
