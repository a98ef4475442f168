//! Service metadata served at the root path.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / -- service name, version and a map of the public endpoints.
async fn root() -> Json<Value> {
    Json(json!({
        "message": "K-Franchise API - MySQL",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "categories": "/api/categories",
            "franchises": "/api/franchises",
            "franchise_by_id": "/api/franchises/{id}",
            "franchises_by_category": "/api/categories/{category_id}/franchises",
            "search": "/api/search?q={query}",
            "stats": "/api/stats",
        },
    }))
}

/// Mount the root metadata route (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root))
}
