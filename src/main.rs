mod config;
mod db;
mod error;
mod generator;
mod models;
mod routes;
mod utils;
mod websocket;

use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use config::Config;
use sqlx::PgPool;
use tokio::sync::broadcast;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use websocket::messages::ResourceEvent;

/// Capacity of the resource-event broadcast channel. A slow subscriber that
/// falls further behind than this starts skipping events.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub db: PgPool,
    /// Fan-out of save/delete notifications to WebSocket subscribers
    pub events: broadcast::Sender<ResourceEvent>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "puzzle_forge_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting puzzle forge backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Connect to database
    let db = db::create_pool(config.database_url(), config.database.max_connections).await?;
    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations").run(&db).await?;
    tracing::info!("Database migrations completed");

    // Create the resource-event channel; receivers come and go with
    // WebSocket subscribers
    let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

    // Create application state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        events,
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket::handle_websocket))
        // API routes
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Resource feed endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
