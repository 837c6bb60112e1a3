// Main entry point for API server

use anyhow::{Context, Result};
use server_core::db::{MongoDb, DATABASE_NAME};
use server_core::domains::listings::{ListingService, ListingStore};
use server_core::server::{build_app, AppState};
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Household Reuse Platform API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    let db = MongoDb::connect(&config.mongo_url, DATABASE_NAME)
        .await
        .context("Failed to connect to MongoDB")?;

    let store = ListingStore::new(&db);
    store
        .ensure_indexes()
        .await
        .context("Failed to create indexes")?;
    tracing::info!("Indexes ensured");

    // Build application
    let state = AppState {
        listings: ListingService::new(store),
        db,
    };
    let app = build_app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
