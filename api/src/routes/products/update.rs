use actix_web::{web, HttpResponse};
use validator::Validate;

use orchard_core::errors::DomainError;

use crate::app::AppState;
use crate::dto::product::UpdateProductRequest;
use crate::handlers::error::{handle_domain_error, product_not_found};

/// Handler for PUT /products/{id}
///
/// Overlays the supplied fields onto the stored product; absent fields
/// keep their current value. Find-then-save, not atomic.
///
/// # Response
///
/// ## Success (200 OK)
/// The updated product as JSON.
///
/// ## Errors
/// - 400 Bad Request: invalid fields
/// - 404 Not Found: no product with the given id
/// - 500 Internal Server Error: storage failure
pub async fn update_product(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    request: web::Json<UpdateProductRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_domain_error(&DomainError::Validation {
            message: errors.to_string(),
        });
    }

    match state
        .product_repository
        .update(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => product_not_found(),
        Err(error) => handle_domain_error(&DomainError::Storage(error)),
    }
}
