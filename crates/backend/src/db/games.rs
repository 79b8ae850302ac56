//! Game-related database operations

use deadpool_postgres::Pool;
use tokio_postgres::Row;
use wordle_core::{Game, NewGame};
use crate::db::DbError;

fn game_from_row(row: &Row) -> Result<Game, tokio_postgres::Error> {
    Ok(Game {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        attempts: row.try_get("attempts")?,
        time: row.try_get("time")?,
        gamemode: row.try_get("game_type")?,
    })
}

/// Get every recorded game, in whatever order the table returns them
pub async fn get_all_games(pool: &Pool) -> Result<Vec<Game>, DbError> {
    let client = pool.get().await?;

    let rows = client.query(
        "SELECT id, username, game_type, attempts, time FROM games",
        &[]
    ).await?;

    let games = rows.iter()
        .map(game_from_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(games)
}

pub async fn get_game_by_id(pool: &Pool, id: i64) -> Result<Option<Game>, DbError> {
    let client = pool.get().await?;

    let row = client.query_opt(
        "SELECT id, username, game_type, attempts, time FROM games WHERE id = $1",
        &[&id]
    ).await?;

    Ok(row.as_ref().map(game_from_row).transpose()?)
}

/// Insert a validated game and return the id the table assigned.
///
/// If reading back the id fails the row has still been written.
pub async fn insert_game(pool: &Pool, game: &NewGame) -> Result<i64, DbError> {
    let client = pool.get().await?;
    let game_type = game.gamemode.as_str();

    let row = client.query_one(
        r#"
        INSERT INTO games (username, attempts, time, game_type)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
        &[&game.username, &game.attempts, &game.time, &game_type]
    ).await?;

    Ok(row.try_get("id")?)
}
