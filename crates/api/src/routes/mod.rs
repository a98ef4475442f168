pub mod categories;
pub mod franchises;
pub mod health;
pub mod meta;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                  liveness + database status
///
/// /categories                              list categories
/// /categories/{category_id}/franchises     franchises of one category
///
/// /franchises                              list (skip, limit, category_id)
/// /franchises/{id}                         get one franchise
///
/// /search                                  search (q, category_id, limit)
/// /stats                                   aggregate counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/categories", categories::router())
        .nest("/franchises", franchises::router())
        .route("/search", get(handlers::search::search_franchises))
        .route("/stats", get(handlers::stats::get_statistics))
}
