//! In-memory store used by route tests

use std::sync::Mutex;

use async_trait::async_trait;
use deadpool_postgres::PoolError;
use wordle_core::{Game, NewGame, User};
use crate::db::{DbError, Store};

#[derive(Default)]
pub struct MemoryStore {
    games: Mutex<Vec<Game>>,
    users: Mutex<Vec<User>>,
    /// When set, every call fails as if the pool had been closed
    broken: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails
    pub fn broken() -> Self {
        Self { broken: true, ..Self::default() }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self { users: Mutex::new(users), ..Self::default() }
    }

    pub fn game_count(&self) -> usize {
        self.games.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), DbError> {
        if self.broken {
            return Err(DbError::Pool(PoolError::Closed));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), DbError> {
        self.check()
    }

    async fn list_games(&self) -> Result<Vec<Game>, DbError> {
        self.check()?;
        Ok(self.games.lock().unwrap().clone())
    }

    async fn find_game(&self, id: i64) -> Result<Option<Game>, DbError> {
        self.check()?;
        Ok(self.games.lock().unwrap().iter().find(|g| g.id == id).cloned())
    }

    async fn insert_game(&self, game: &NewGame) -> Result<i64, DbError> {
        self.check()?;
        let mut games = self.games.lock().unwrap();
        let id = games.last().map_or(1, |g| g.id + 1);
        games.push(game.clone().with_id(id));
        Ok(id)
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        self.check()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, DbError> {
        self.check()?;
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }
}
