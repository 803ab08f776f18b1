//! JWT encoding and decoding for session tokens.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

/// Signs and verifies the session claims payload for a single secret
///
/// One codec per secret: access and refresh tokens never share keys.
/// Expiry handling is structural — an expiring codec requires and enforces
/// the `exp` claim, a non-expiring codec ignores it.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Codec for tokens that carry an expiry (access tokens)
    pub fn expiring(secret: &str) -> Self {
        Self::build(secret, true)
    }

    /// Codec for tokens without an expiry (refresh tokens)
    pub fn non_expiring(secret: &str) -> Self {
        Self::build(secret, false)
    }

    fn build(secret: &str, validate_exp: bool) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The access window is seconds wide; jsonwebtoken's default 60s
        // leeway would swallow it entirely.
        validation.leeway = 0;
        validation.validate_exp = validate_exp;
        if !validate_exp {
            validation.set_required_spec_claims::<&str>(&[]);
        }

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Encode claims into a signed token string
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed)
    }

    /// Decode a token string and return its claims
    ///
    /// # Returns
    /// * `Ok(Claims)` - Signature verified (and not expired, for expiring codecs)
    /// * `Err(TokenError::TokenExpired)` - Past the embedded expiry
    /// * `Err(TokenError::InvalidSignature)` - Bad signature or malformed token
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::InvalidSignature,
            })
    }
}
