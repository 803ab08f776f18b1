use actix_web::{web, HttpResponse};

use orchard_core::errors::DomainError;

use crate::app::AppState;
use crate::handlers::error::{handle_domain_error, product_not_found};

/// Handler for GET /products/{id}
///
/// # Response
///
/// ## Success (200 OK)
/// The product as JSON.
///
/// ## Errors
/// - 404 Not Found: no product with the given id
/// - 500 Internal Server Error: storage failure
pub async fn get_product(state: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    match state.product_repository.find_by_id(path.into_inner()).await {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => product_not_found(),
        Err(error) => handle_domain_error(&DomainError::Storage(error)),
    }
}
