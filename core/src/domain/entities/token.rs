//! Token entities for signed session handling.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Access token expiration time (15 seconds)
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 15;

/// Claims structure for the signed session payload
///
/// The only identity carried is a display name. Expiry is structural:
/// access tokens carry `exp`, refresh tokens do not and never expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Display name of the session owner
    pub name: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp; absent for refresh tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Creates claims for an access token expiring `ttl` from now
    pub fn new_access(name: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            iat: now.timestamp(),
            exp: Some((now + ttl).timestamp()),
        }
    }

    /// Creates claims for a refresh token with no expiry
    pub fn new_refresh(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iat: Utc::now().timestamp(),
            exp: None,
        }
    }

    /// Checks if the claims have expired
    ///
    /// Claims without an expiry never expire.
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => Utc::now().timestamp() >= exp,
            None => false,
        }
    }
}

/// Access/refresh token pair returned by login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token
    pub access_token: String,

    /// Long-lived refresh token, tracked server-side
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
