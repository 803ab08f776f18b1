//! Authentication configuration module

use super::{require_env, ConfigError};

/// Default lifetime of an access token in seconds
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 15;

/// Token signing configuration
///
/// Both secrets are deployment-time inputs with no defaults; loading fails
/// if either is missing from the environment.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret used to sign and verify access tokens
    pub access_secret: String,

    /// Secret used to sign and verify refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    pub access_token_ttl_secs: i64,
}

impl AuthConfig {
    /// Create a new configuration with the default access token lifetime
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
        }
    }

    /// Load from `ACCESS_SECRET`, `REFRESH_SECRET` and optional
    /// `ACCESS_TOKEN_TTL_SECS`
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_secret = require_env("ACCESS_SECRET")?;
        let refresh_secret = require_env("REFRESH_SECRET")?;

        let access_token_ttl_secs = match std::env::var("ACCESS_TOKEN_TTL_SECS") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "ACCESS_TOKEN_TTL_SECS",
                value: raw,
            })?,
            Err(_) => DEFAULT_ACCESS_TOKEN_TTL_SECS,
        };

        Ok(Self {
            access_secret,
            refresh_secret,
            access_token_ttl_secs,
        })
    }

    /// Set the access token lifetime
    pub fn with_access_token_ttl(mut self, secs: i64) -> Self {
        self.access_token_ttl_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_ttl() {
        let config = AuthConfig::new("access", "refresh");
        assert_eq!(config.access_token_ttl_secs, DEFAULT_ACCESS_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_with_access_token_ttl() {
        let config = AuthConfig::new("access", "refresh").with_access_token_ttl(60);
        assert_eq!(config.access_token_ttl_secs, 60);
    }
}
