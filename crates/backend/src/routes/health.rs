//! Liveness and CORS preflight handlers

use axum::{http::StatusCode, Json};
use wordle_core::constants::PING_MESSAGE;
use wordle_core::ApiMessage;

/// GET /ping
///
/// Never touches the store, so it answers even when the database is down.
pub async fn ping() -> Json<ApiMessage> {
    tracing::info!("Request for /ping received");
    Json(ApiMessage::new(PING_MESSAGE))
}

/// OPTIONS on any route. The CORS layer usually answers before this runs and
/// adds the allow-* headers either way.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
