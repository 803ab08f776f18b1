//! Integration tests for the product CRUD endpoints.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use rust_decimal::Decimal;
use serde_json::json;

use orchard_api::app::{create_app, AppState};
use orchard_core::domain::entities::product::Product;
use orchard_core::repositories::{
    FailingProductRepository, InMemoryTokenStore, MockProductRepository,
};
use orchard_core::services::auth::AuthService;
use orchard_core::services::token::TokenConfig;

fn test_state() -> AppState {
    AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::new(InMemoryTokenStore::new()),
            TokenConfig::new("test-access-secret", "test-refresh-secret"),
        )),
        product_repository: Arc::new(MockProductRepository::new()),
    }
}

fn failing_state() -> AppState {
    AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::new(InMemoryTokenStore::new()),
            TokenConfig::new("test-access-secret", "test-refresh-secret"),
        )),
        product_repository: Arc::new(FailingProductRepository),
    }
}

fn iphone_body() -> serde_json::Value {
    json!({
        "name": "iPhone 15",
        "description": "Latest model",
        "img_url": "https://img.example.com/iphone15.png",
        "price": 999.99,
        "slug": "iphone-15"
    })
}

/// POST a product and return the stored entity
macro_rules! create_product {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json($body)
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let product: Product = test::read_body_json(resp).await;
        product
    }};
}

#[actix_web::test]
async fn test_create_assigns_id_and_round_trips() {
    let app = test::init_service(create_app(test_state())).await;
    let created = create_product!(&app, iphone_body());

    assert_eq!(created.product_id, 1);
    assert_eq!(created.name, "iPhone 15");
    assert_eq!(created.price, Decimal::new(99999, 2));

    let req = test::TestRequest::get()
        .uri(&format!("/products/{}", created.product_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: Product = test::read_body_json(resp).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_get_missing_product_is_not_found() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/products/42").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Product not found");
}

#[actix_web::test]
async fn test_list_returns_created_products() {
    let app = test::init_service(create_app(test_state())).await;
    create_product!(&app, iphone_body());
    create_product!(
        &app,
        json!({
            "name": "MacBook Air",
            "description": "M3, 13-inch",
            "img_url": "https://img.example.com/mba.png",
            "price": 1299,
            "slug": "macbook-air"
        })
    );

    // The listing is the one protected product route.
    let login_req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "username": "alice" }))
        .to_request();
    let login_resp = test::call_service(&app, login_req).await;
    let tokens: serde_json::Value = test::read_body_json(login_resp).await;
    let access_token = tokens["accessToken"].as_str().expect("access token");

    let req = test::TestRequest::get()
        .uri("/products")
        .insert_header(("Authorization", format!("Bearer {access_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let products: Vec<Product> = test::read_body_json(resp).await;
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].product_id, 1);
    assert_eq!(products[1].name, "MacBook Air");
}

#[actix_web::test]
async fn test_update_overlays_partial_fields() {
    let app = test::init_service(create_app(test_state())).await;
    let created = create_product!(&app, iphone_body());

    let req = test::TestRequest::put()
        .uri(&format!("/products/{}", created.product_id))
        .set_json(json!({ "price": 899.99 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Product = test::read_body_json(resp).await;
    assert_eq!(updated.price, Decimal::new(89999, 2));
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.slug, created.slug);
}

#[actix_web::test]
async fn test_update_missing_product_is_not_found() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::put()
        .uri("/products/42")
        .set_json(json!({ "price": 1.00 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_then_fetch_is_not_found() {
    let app = test::init_service(create_app(test_state())).await;
    let created = create_product!(&app, iphone_body());
    let uri = format!("/products/{}", created.product_id);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Product deleted successfully");

    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_missing_product_is_not_found() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::delete().uri("/products/42").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_storage_failure_passes_diagnostic_through() {
    let app = test::init_service(create_app(failing_state())).await;

    let req = test::TestRequest::get().uri("/products/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "storage_error");
    assert_eq!(body["message"], "database connection lost");
    assert_eq!(body["detail"], "connection refused");
}

#[actix_web::test]
async fn test_create_rejects_empty_name() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({
            "name": "",
            "description": "",
            "img_url": "https://img.example.com/x.png",
            "price": 1,
            "slug": "x"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
