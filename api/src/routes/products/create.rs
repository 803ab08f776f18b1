use actix_web::{web, HttpResponse};
use validator::Validate;

use orchard_core::errors::DomainError;

use crate::app::AppState;
use crate::dto::product::CreateProductRequest;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /products
///
/// Inserts a product; the repository assigns `product_id`.
///
/// # Response
///
/// ## Success (201 Created)
/// The stored product as JSON, including its assigned id.
///
/// ## Errors
/// - 400 Bad Request: invalid fields
/// - 500 Internal Server Error: storage failure
pub async fn create_product(
    state: web::Data<AppState>,
    request: web::Json<CreateProductRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_domain_error(&DomainError::Validation {
            message: errors.to_string(),
        });
    }

    match state
        .product_repository
        .create(request.into_inner().into())
        .await
    {
        Ok(product) => HttpResponse::Created().json(product),
        Err(error) => handle_domain_error(&DomainError::Storage(error)),
    }
}
