//! Game route handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use wordle_core::constants::GAME_NOT_FOUND;
use wordle_core::{Game, GameSubmission};
use crate::AppState;
use crate::error::ApiError;
use crate::extract::{JsonBody, PathId};

/// GET /games
pub async fn get_all_games(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Game>>, ApiError> {
    tracing::info!("Request for /games received");
    let games = state.store.list_games().await?;
    Ok(Json(games))
}

/// POST /games
///
/// An unknown game mode stops the request with 422 before anything is
/// written.
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    JsonBody(submission): JsonBody<GameSubmission>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    tracing::info!("POST request for /games received");
    let new_game = submission.validate()?;

    let id = state.store.insert_game(&new_game).await?;
    tracing::info!(
        id,
        username = %new_game.username,
        gamemode = %new_game.gamemode,
        "Game recorded"
    );

    Ok((StatusCode::CREATED, Json(new_game.with_id(id))))
}

/// GET /games/{id}
pub async fn get_game_by_id(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> Result<Json<Game>, ApiError> {
    tracing::info!(id, "Request for /games/{{id}} received");
    state.store
        .find_game(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(GAME_NOT_FOUND))
}
