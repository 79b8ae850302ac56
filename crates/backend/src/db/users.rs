//! User-related database operations

use deadpool_postgres::Pool;
use tokio_postgres::Row;
use wordle_core::User;
use crate::db::DbError;

fn user_from_row(row: &Row) -> Result<User, tokio_postgres::Error> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        forename: row.try_get("firstname")?,
        surname: row.try_get("surname")?,
        dob: row.try_get("dob")?,
    })
}

/// Get all users
pub async fn get_all_users(pool: &Pool) -> Result<Vec<User>, DbError> {
    let client = pool.get().await?;

    let rows = client.query(
        "SELECT id, username, firstname, surname, dob FROM users",
        &[]
    ).await?;

    Ok(rows.iter().map(user_from_row).collect::<Result<Vec<_>, _>>()?)
}

pub async fn get_user_by_id(pool: &Pool, id: i64) -> Result<Option<User>, DbError> {
    let client = pool.get().await?;

    let row = client.query_opt(
        r#"
        SELECT id, username, firstname, surname, dob
        FROM users
        WHERE id = $1
        "#,
        &[&id]
    ).await?;

    Ok(row.as_ref().map(user_from_row).transpose()?)
}
