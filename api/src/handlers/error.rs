//! Central mapping from domain errors to HTTP responses.
//!
//! Taxonomy: missing credential is 401, a credential that is present but
//! invalid/expired/unknown is 403, absent entities are 404, storage
//! failures are 500 with the driver diagnostic passed through.

use actix_web::{http::StatusCode, HttpResponse};

use orchard_core::errors::{DomainError, TokenError};

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Convert a domain error into the corresponding HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    log::error!("Domain error: {error:?}");

    match error {
        DomainError::Token(token_error) => handle_token_error(token_error),
        DomainError::Storage(storage_error) => {
            let mut body = ErrorResponse::new("storage_error", storage_error.message.as_str());
            if let Some(detail) = &storage_error.detail {
                body = body.with_detail(detail.as_str());
            }
            body.to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
        DomainError::Validation { message } => ErrorResponse::new("validation_error", message.as_str())
            .to_response(StatusCode::BAD_REQUEST),
        DomainError::Internal { message } => ErrorResponse::new("internal_error", message.as_str())
            .to_response(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

fn handle_token_error(error: &TokenError) -> HttpResponse {
    match error {
        TokenError::MissingToken => {
            ErrorResponse::new("missing_token", "Authentication token is required")
                .to_response(StatusCode::UNAUTHORIZED)
        }
        TokenError::InvalidSignature => {
            ErrorResponse::new("invalid_token", "Token verification failed")
                .to_response(StatusCode::FORBIDDEN)
        }
        TokenError::TokenExpired => ErrorResponse::new("token_expired", "Token has expired")
            .to_response(StatusCode::FORBIDDEN),
        TokenError::UnknownRefreshToken => {
            ErrorResponse::new("unknown_refresh_token", "Refresh token is not recognized")
                .to_response(StatusCode::FORBIDDEN)
        }
        TokenError::TokenGenerationFailed => {
            ErrorResponse::new("token_generation_failed", "Failed to generate token")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Build an actix error carrying the same response body, for extractors
pub fn domain_error_to_actix(error: DomainError) -> actix_web::Error {
    let response = handle_domain_error(&error);
    actix_web::error::InternalError::from_response(error, response).into()
}

/// Standard 404 body for an absent product
pub fn product_not_found() -> HttpResponse {
    ErrorResponse::new("not_found", "Product not found").to_response(StatusCode::NOT_FOUND)
}
