//! User route handlers

use axum::{
    extract::State,
    Json,
};
use std::sync::Arc;
use wordle_core::constants::USER_NOT_FOUND;
use wordle_core::User;
use crate::AppState;
use crate::error::ApiError;
use crate::extract::PathId;

/// GET /users
pub async fn get_all_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<User>>, ApiError> {
    tracing::info!("Request for /users received");
    Ok(Json(state.store.list_users().await?))
}

/// GET /users/{id}
pub async fn get_user_by_id(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> Result<Json<User>, ApiError> {
    tracing::info!(id, "Request for /users/{{id}} received");
    match state.store.find_user(id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(ApiError::NotFound(USER_NOT_FOUND)),
    }
}
