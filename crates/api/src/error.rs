use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kfranchise_core::error::CoreError;
use kfranchise_db::ConnectionError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds database and
/// HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent `{"error": ..., "code": ...}` JSON responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `kfranchise_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No connection could be checked out of the pool.
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// A statement failed on an acquired connection.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The query string or path could not be parsed.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Connection(err) => {
                tracing::error!(error = %err, "Database unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONNECTION_ERROR",
                    err.to_string(),
                )
            }
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Transport and pool failures map to 500 `CONNECTION_ERROR`.
/// - Everything else maps to 500 `QUERY_ERROR` with the driver message.
///
/// Connections are opened from field-wise options, so driver messages never
/// contain the password.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => {
            tracing::error!(error = %err, "Database connection lost");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONNECTION_ERROR",
                format!("Database connection error: {err}"),
            )
        }
        other => {
            tracing::error!(error = %other, "Query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "QUERY_ERROR",
                other.to_string(),
            )
        }
    }
}
