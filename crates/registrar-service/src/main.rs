//! Registrar Service - HTTP API for course registration administration
//!
//! This is the main entry point for the registrar service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use registrar_service::{create_router, seed, AppState, ServiceConfig};
use registrar_store::SqliteStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,registrar=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Registrar Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        database_url = %config.database_url,
        max_connections = config.database_max_connections,
        seed_on_start = config.seed_on_start,
        "Service configuration loaded"
    );

    // Open the SQLite store and apply migrations
    let store = Arc::new(
        SqliteStore::connect(&config.database_url, config.database_max_connections).await?,
    );

    // Build app state
    let state = AppState::new(store, config.clone());

    if config.seed_on_start {
        let summary = seed(&state.admin).await;
        tracing::info!(
            applied = summary.applied,
            rejected = summary.rejected,
            "Seed data applied"
        );
    }

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
