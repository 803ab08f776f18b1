use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::auth::TokenRequest;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /auth/logout
///
/// Removes the given refresh token from the store. No signature check is
/// performed and the response is the same whether or not the token was
/// registered.
///
/// # Response
///
/// ## Success (204 No Content)
pub async fn logout(state: web::Data<AppState>, request: web::Json<TokenRequest>) -> HttpResponse {
    if let Some(token) = request.token.as_deref() {
        if let Err(error) = state.auth_service.logout(token).await {
            return handle_domain_error(&error);
        }
    }

    HttpResponse::NoContent().finish()
}
