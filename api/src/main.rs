use std::sync::Arc;

use actix_web::HttpServer;
use dotenvy::dotenv;
use log::info;

use orchard_api::app::{self, AppState};
use orchard_core::repositories::InMemoryTokenStore;
use orchard_core::services::auth::AuthService;
use orchard_core::services::token::TokenConfig;
use orchard_infra::{DatabasePool, PgProductRepository};
use orchard_shared::{AuthConfig, DatabaseConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Orchard API server");

    // Load configuration; the token secrets have no defaults
    let server_config = ServerConfig::from_env().expect("invalid server configuration");
    let auth_config = AuthConfig::from_env().expect("ACCESS_SECRET and REFRESH_SECRET must be set");
    let database_config = DatabaseConfig::from_env().expect("incomplete database configuration");

    // Connect to PostgreSQL and make sure the products table exists
    let pool = DatabasePool::new(&database_config)
        .await
        .expect("failed to connect to the database");
    pool.health_check()
        .await
        .expect("database did not answer the health check");

    let product_repository = Arc::new(PgProductRepository::new(pool.get_pool().clone()));
    product_repository
        .ensure_schema()
        .await
        .expect("failed to prepare the products table");

    // Refresh tokens live in process memory; they are cleared on restart
    let token_store = Arc::new(InMemoryTokenStore::new());
    let auth_service = Arc::new(AuthService::new(token_store, TokenConfig::from(&auth_config)));

    let state = AppState {
        auth_service,
        product_repository,
    };

    let bind_address = server_config.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || app::create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
