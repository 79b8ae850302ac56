//! Store capability handed to route handlers

use async_trait::async_trait;
use deadpool_postgres::{Config, Pool, Runtime};
use tokio_postgres::NoTls;
use wordle_core::{Game, NewGame, User};
use crate::db::DbError;

/// Everything the HTTP layer needs from storage.
///
/// Each method is a single autocommit statement; no method retries.
#[async_trait]
pub trait Store: Send + Sync {
    /// Liveness check used at startup
    async fn ping(&self) -> Result<(), DbError>;

    async fn list_games(&self) -> Result<Vec<Game>, DbError>;

    async fn find_game(&self, id: i64) -> Result<Option<Game>, DbError>;

    /// Insert a game and return its assigned id
    async fn insert_game(&self, game: &NewGame) -> Result<i64, DbError>;

    async fn list_users(&self) -> Result<Vec<User>, DbError>;

    async fn find_user(&self, id: i64) -> Result<Option<User>, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

/// Build the pool and make sure the database answers before serving traffic
pub async fn connect(config: &Config) -> Result<PgStore, DbError> {
    let pool = config.create_pool(Some(Runtime::Tokio1), NoTls)?;
    let store = PgStore::new(pool);
    store.ping().await?;
    Ok(store)
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), DbError> {
        let client = self.pool.get().await?;
        client.execute("SELECT 1", &[]).await?;
        Ok(())
    }

    async fn list_games(&self) -> Result<Vec<Game>, DbError> {
        crate::db::get_all_games(&self.pool).await
    }

    async fn find_game(&self, id: i64) -> Result<Option<Game>, DbError> {
        crate::db::get_game_by_id(&self.pool, id).await
    }

    async fn insert_game(&self, game: &NewGame) -> Result<i64, DbError> {
        crate::db::insert_game(&self.pool, game).await
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        crate::db::get_all_users(&self.pool).await
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, DbError> {
        crate::db::get_user_by_id(&self.pool, id).await
    }
}
