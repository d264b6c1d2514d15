use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(sqlx::Error),
    DatabaseTimeout,
    ConfigError(String),
    InternalError(String),
    NotFound(String),
    BadRequest(String),
    MethodNotAllowed,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(e) => write!(f, "database error: {}", e),
            AppError::DatabaseTimeout => write!(f, "database call exceeded its deadline"),
            AppError::ConfigError(msg) => write!(f, "configuration error: {}", msg),
            AppError::InternalError(msg) => write!(f, "internal error: {}", msg),
            AppError::NotFound(msg) => write!(f, "not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "bad request: {}", msg),
            AppError::MethodNotAllowed => write!(f, "method not allowed"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => AppError::DatabaseTimeout,
            err => AppError::DatabaseError(err),
        }
    }
}

// Error bodies are plain text; the underlying cause of a 5xx never leaves the process.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::DatabaseError(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error")
            }
            AppError::DatabaseTimeout => {
                tracing::error!("Database call timed out");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database timeout")
            }
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server configuration error")
            }
            AppError::InternalError(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
        };

        (status, message.to_string()).into_response()
    }
}
