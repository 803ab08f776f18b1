use actix_web::{web, HttpResponse};
use validator::Validate;

use orchard_core::errors::DomainError;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /auth/login
///
/// Issues an access/refresh token pair for the supplied username and
/// registers the refresh token. No credential check is performed: any
/// username is accepted as the session identity.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "refreshToken": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: empty or oversized username
/// - 500 Internal Server Error: token signing failure
pub async fn login(state: web::Data<AppState>, request: web::Json<LoginRequest>) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_domain_error(&DomainError::Validation {
            message: errors.to_string(),
        });
    }

    match state.auth_service.login(&request.username).await {
        Ok(pair) => HttpResponse::Ok().json(LoginResponse {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
