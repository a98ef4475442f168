use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`.
    pub status: &'static str,
    /// `connected` or `disconnected`.
    pub database: &'static str,
    /// Database engine behind the API.
    #[serde(rename = "type")]
    pub db_type: &'static str,
    /// Why the database check failed, when it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /api/health -- runs `SELECT 1` on a fresh connection.
///
/// Always answers 200; a failing database is reported in the payload.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let response = match state.db.ping().await {
        Ok(()) => HealthResponse {
            status: "healthy",
            database: "connected",
            db_type: "MySQL",
            error: None,
        },
        Err(err) => {
            tracing::warn!(error = %err, "Health check failed");
            HealthResponse {
                status: "unhealthy",
                database: "disconnected",
                db_type: "MySQL",
                error: Some(err.to_string()),
            }
        }
    };

    Json(response)
}

/// Mount health check routes (nested under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
