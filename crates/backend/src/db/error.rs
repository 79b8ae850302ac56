//! Database error types

use deadpool_postgres::{CreatePoolError, PoolError};

#[derive(Debug)]
pub enum DbError {
    CreatePool(CreatePoolError),
    Pool(PoolError),
    Postgres(tokio_postgres::Error),
}

impl From<CreatePoolError> for DbError {
    fn from(e: CreatePoolError) -> Self {
        DbError::CreatePool(e)
    }
}

impl From<PoolError> for DbError {
    fn from(e: PoolError) -> Self {
        DbError::Pool(e)
    }
}

impl From<tokio_postgres::Error> for DbError {
    fn from(e: tokio_postgres::Error) -> Self {
        DbError::Postgres(e)
    }
}

impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbError::CreatePool(e) => write!(f, "Pool setup error: {}", e),
            DbError::Pool(e) => write!(f, "Pool error: {}", e),
            DbError::Postgres(e) => write!(f, "Postgres error: {}", e),
        }
    }
}

impl std::error::Error for DbError {}
