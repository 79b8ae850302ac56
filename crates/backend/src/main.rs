//! Wordle Clone Backend Server
//!
//! Provides:
//! - REST API for finished games and registered users
//! - PostgreSQL storage behind an injectable `Store`

mod config;
mod db;
mod error;
mod extract;
mod routes;

use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::Store;
use crate::error::StartupError;

pub struct AppState {
    pub store: Arc<dyn Store>,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "wordle_backend=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    tracing::info!("Initialising DB connection...");
    let store = db::connect(&config.database).await?;
    tracing::info!("Connected to database");

    let state = Arc::new(AppState {
        store: Arc::new(store),
    });
    let app = build_router(state);

    tracing::info!("Starting server on {}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/ping", get(routes::ping).options(routes::preflight))
        // Games
        .route("/games", get(routes::get_all_games)
            .post(routes::create_game)
            .options(routes::preflight))
        .route("/games/{id}", get(routes::get_game_by_id).options(routes::preflight))
        // Users
        .route("/users", get(routes::get_all_users).options(routes::preflight))
        .route("/users/{id}", get(routes::get_user_by_id).options(routes::preflight))
        .with_state(state)
        .layer(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
