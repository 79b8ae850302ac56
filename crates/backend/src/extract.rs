//! Request extractors that reject with `ApiError`

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Integer id from a `/resource/{id}` path
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId)?;

        raw.parse().map(Self).map_err(|_| ApiError::InvalidId)
    }
}

/// JSON body that rejects with 422 on any decode failure.
///
/// Unlike `axum::Json` this does not require a `Content-Type` header.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::InvalidBody)?;

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            tracing::debug!("Malformed request body: {}", e);
            ApiError::InvalidBody
        })
    }
}
