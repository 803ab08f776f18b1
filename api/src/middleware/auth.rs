//! Bearer-token authentication for protected endpoints.
//!
//! `AuthContext` is an extractor: a handler that takes it only runs with a
//! verified access token. A missing `Authorization` header or missing
//! token segment is 401; a token that is present but fails verification
//! (bad signature or expired) is 403.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, Error, FromRequest, HttpRequest};

use orchard_core::errors::{DomainError, TokenError};

use crate::app::AppState;
use crate::handlers::error::domain_error_to_actix;

/// Authenticated session identity injected into handlers
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Display name from the verified claims
    pub name: String,
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthContext, Error> {
    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        domain_error_to_actix(DomainError::Internal {
            message: "Application state is not configured".to_string(),
        })
    })?;

    let token = extract_bearer_token(req)
        .ok_or_else(|| domain_error_to_actix(DomainError::Token(TokenError::MissingToken)))?;

    let claims = state
        .auth_service
        .verify_access(&token)
        .map_err(domain_error_to_actix)?;

    Ok(AuthContext { name: claims.name })
}

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
