//! Product request and response payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use orchard_core::domain::entities::product::{NewProduct, ProductPatch};

/// Body of POST /products
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: String,
    pub img_url: String,
    pub price: Decimal,
    #[validate(length(min = 1, max = 255))]
    pub slug: String,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            description: request.description,
            img_url: request.img_url,
            price: request.price,
            slug: request.slug,
        }
    }
}

/// Body of PUT /products/{id}
///
/// Absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub img_url: Option<String>,
    pub price: Option<Decimal>,
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        ProductPatch {
            name: request.name,
            description: request.description,
            img_url: request.img_url,
            price: request.price,
            slug: request.slug,
        }
    }
}

/// Body of a successful DELETE /products/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}
