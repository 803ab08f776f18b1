//! Authentication request and response payloads.
//!
//! Auth payloads use camelCase keys on the wire.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of POST /auth/login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
}

/// Body of POST /auth/refresh and POST /auth/logout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    /// Refresh token; an absent field is treated as a missing credential
    pub token: Option<String>,
}

/// Successful login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Successful refresh payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_uses_camel_case() {
        let body = serde_json::to_value(LoginResponse {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        })
        .expect("serializable");

        assert_eq!(body["accessToken"], "a");
        assert_eq!(body["refreshToken"], "r");
    }

    #[test]
    fn test_token_request_tolerates_missing_field() {
        let request: TokenRequest = serde_json::from_str("{}").expect("deserializable");
        assert_eq!(request.token, None);
    }
}
