use actix_web::{web, HttpResponse};

use orchard_core::errors::{DomainError, TokenError};

use crate::app::AppState;
use crate::dto::auth::{RefreshResponse, TokenRequest};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /auth/refresh
///
/// Exchanges a registered refresh token for a new access token. The
/// refresh token itself is not rotated.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: no token in the body
/// - 403 Forbidden: token unknown to the store or failing verification
pub async fn refresh(state: web::Data<AppState>, request: web::Json<TokenRequest>) -> HttpResponse {
    let token = match request.token.as_deref() {
        Some(token) if !token.is_empty() => token,
        _ => return handle_domain_error(&DomainError::Token(TokenError::MissingToken)),
    };

    match state.auth_service.refresh(token).await {
        Ok(access_token) => HttpResponse::Ok().json(RefreshResponse { access_token }),
        Err(error) => handle_domain_error(&error),
    }
}
