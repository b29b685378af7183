//! Vellum Server - Book Inventory Service
//!
//! A small Rust REST API server exposing an in-memory book inventory.

use axum::{
    routing::{get, patch, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vellum_server::{
    api, config::AppConfig, models::book::Book, repository::Repository, services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("vellum_server={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Vellum Server v{}", env!("CARGO_PKG_VERSION"));

    // Build the in-memory inventory; contents are volatile and reset on restart
    let seed = seed_catalog();
    tracing::info!("Seeding inventory with {} books", seed.len());
    let repository = Repository::with_seed(seed);

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services and application state
    let services = Services::new(repository);
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/healthz", get(api::health::health_check))
        // Inventory
        .route("/books", get(api::books::list_books))
        .route("/book/create", post(api::books::create_book))
        .route("/book/:id", get(api::books::get_book))
        .route("/book/checkout", patch(api::books::checkout_book))
        .route("/book/return", patch(api::books::return_book))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    routes
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Books present at startup
fn seed_catalog() -> Vec<Book> {
    vec![
        Book {
            id: "1".to_string(),
            title: "In Search of Lost Time".to_string(),
            author: "Marcel Proust".to_string(),
            quantity: 2,
        },
        Book {
            id: "2".to_string(),
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            quantity: 5,
        },
        Book {
            id: "3".to_string(),
            title: "War and Peace".to_string(),
            author: "Leo Tolstoy".to_string(),
            quantity: 6,
        },
    ]
}
