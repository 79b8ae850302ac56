//! HTTP error mapping
//!
//! Every error leaves the server as an `ApiMessage` body with a generic
//! message. Store failures are logged here, once, with their details.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use wordle_core::constants::{INTERNAL_SERVER_ERROR, INVALID_ID, INVALID_REQUEST_BODY};
use wordle_core::{ApiMessage, ValidationError};

use crate::config::ConfigError;
use crate::db::DbError;

#[derive(Debug)]
pub enum ApiError {
    /// Body is not JSON of the expected shape (422)
    InvalidBody,

    /// Path id is not an integer (400)
    InvalidId,

    /// Body parsed but a field failed validation (422)
    Validation(ValidationError),

    /// No row with the requested id (404)
    NotFound(&'static str),

    /// Query, decode or insert failure (500)
    Store(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidBody => (StatusCode::UNPROCESSABLE_ENTITY, INVALID_REQUEST_BODY),
            Self::InvalidId => (StatusCode::BAD_REQUEST, INVALID_ID),
            Self::Validation(e) => {
                tracing::debug!("Rejected game submission: {}", e);
                (StatusCode::UNPROCESSABLE_ENTITY, e.public_message())
            }
            Self::NotFound(message) => (StatusCode::NOT_FOUND, *message),
            Self::Store(e) => {
                tracing::error!("Store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
            }
        };

        (status, Json(ApiMessage::new(message))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Store(e)
    }
}

/// Fatal errors while bringing the server up
#[derive(Debug)]
pub enum StartupError {
    Config(ConfigError),
    Database(DbError),
    Io(std::io::Error),
}

impl From<ConfigError> for StartupError {
    fn from(e: ConfigError) -> Self {
        StartupError::Config(e)
    }
}

impl From<DbError> for StartupError {
    fn from(e: DbError) -> Self {
        StartupError::Database(e)
    }
}

impl From<std::io::Error> for StartupError {
    fn from(e: std::io::Error) -> Self {
        StartupError::Io(e)
    }
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::Config(e) => write!(f, "Invalid configuration: {}", e),
            StartupError::Database(e) => write!(f, "Failed to connect to database: {}", e),
            StartupError::Io(e) => write!(f, "Server error: {}", e),
        }
    }
}
