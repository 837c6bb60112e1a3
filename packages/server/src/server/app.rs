//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::MongoDb;
use crate::domains::listings::ListingService;
use crate::server::routes::{
    create_item, disposal_guidance_handler, get_item, health_handler, list_items, root_handler,
    stats_handler, update_item_status,
};

/// Shared application state
///
/// All durable state lives in the database; this is just a bundle of cheap
/// handles cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub listings: ListingService,
    pub db: MongoDb,
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // CORS configuration - the platform is consumed by a browser frontend
    // on a different origin, so allow any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/items/:id", get(get_item))
        .route("/api/items/:id/status", put(update_item_status))
        .route("/api/disposal-guidance", post(disposal_guidance_handler))
        .route("/api/stats", get(stats_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
