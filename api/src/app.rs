//! Application state and factory
//!
//! Initializes the shared application state and builds the actix-web
//! application with its middleware and route table.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, Error, HttpResponse};

use orchard_core::repositories::ProductRepository;
use orchard_core::services::auth::AuthService;

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::middleware::cors::create_cors;
use crate::routes;

/// Shared application state injected into every handler
#[derive(Clone)]
pub struct AppState {
    /// Session service for login, refresh, logout and token verification
    pub auth_service: Arc<AuthService>,
    /// Product catalog persistence
    pub product_repository: Arc<dyn ProductRepository>,
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(web::Data::new(state))
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Auth routes
        .service(
            web::scope("/auth")
                .route("/login", web::post().to(routes::auth::login::login))
                .route("/refresh", web::post().to(routes::auth::refresh::refresh))
                .route("/logout", web::post().to(routes::auth::logout::logout)),
        )
        // Product routes; only the listing requires authentication
        .service(
            web::scope("/products")
                .service(
                    web::resource("")
                        .route(web::get().to(routes::products::list::list_products))
                        .route(web::post().to(routes::products::create::create_product)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(routes::products::detail::get_product))
                        .route(web::put().to(routes::products::update::update_product))
                        .route(web::delete().to(routes::products::delete::delete_product)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "orchard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    ErrorResponse::new("not_found", "The requested resource was not found")
        .to_response(actix_web::http::StatusCode::NOT_FOUND)
}
