use actix_web::{web, HttpResponse};

use orchard_core::errors::DomainError;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /products
///
/// Protected: requires a valid access token in the Authorization header.
///
/// # Response
///
/// ## Success (200 OK)
/// A JSON array of all products.
///
/// ## Errors
/// - 401 Unauthorized: missing Authorization header or token segment
/// - 403 Forbidden: invalid or expired access token
/// - 500 Internal Server Error: storage failure
pub async fn list_products(state: web::Data<AppState>, _auth: AuthContext) -> HttpResponse {
    match state.product_repository.find_all().await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(error) => handle_domain_error(&DomainError::Storage(error)),
    }
}
