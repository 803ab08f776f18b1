use actix_web::{web, HttpResponse};

use orchard_core::errors::DomainError;

use crate::app::AppState;
use crate::dto::product::DeleteResponse;
use crate::handlers::error::{handle_domain_error, product_not_found};

/// Handler for DELETE /products/{id}
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Product deleted successfully"
/// }
/// ```
///
/// ## Errors
/// - 404 Not Found: no product with the given id
/// - 500 Internal Server Error: storage failure
pub async fn delete_product(state: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    match state.product_repository.delete(path.into_inner()).await {
        Ok(0) => product_not_found(),
        Ok(_) => HttpResponse::Ok().json(DeleteResponse {
            message: "Product deleted successfully".to_string(),
        }),
        Err(error) => handle_domain_error(&DomainError::Storage(error)),
    }
}
