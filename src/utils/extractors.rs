use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Numeric `{id}` path parameter.
///
/// The segment must be a plain base-10 `i32`. Percent-encoded or padded
/// segments (`%31`, `+%201`) are rejected with 400 rather than normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i32);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Captures arrive percent-decoded; route literals never contain '%', so
        // any escape in the path belongs to the id segment.
        if parts.uri.path().contains('%') {
            return Err(AppError::BadRequest("Invalid id".to_string()));
        }

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("Invalid id".to_string()))?;

        parse_id(&raw).map(ProductId)
    }
}

pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::BadRequest("Invalid id".to_string()))
}

/// JSON body extractor that reports every decoding failure (syntax, missing
/// field, wrong type) as 400 and does not require a `Content-Type` header.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| e.into_response())?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            AppError::BadRequest("Invalid JSON".to_string()).into_response()
        })
    }
}
