//! Route definitions for franchises.
//!
//! Mounted at `/franchises` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::franchises;
use crate::state::AppState;

/// Franchise routes mounted at `/franchises`.
///
/// ```text
/// GET /         -> list_franchises
/// GET /{id}     -> get_franchise
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(franchises::list_franchises))
        .route("/{id}", get(franchises::get_franchise))
}
