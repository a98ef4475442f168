//! Route definitions for categories.
//!
//! Mounted at `/categories` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::{categories, franchises};
use crate::state::AppState;

/// Category routes mounted at `/categories`.
///
/// ```text
/// GET /                              -> list_categories
/// GET /{category_id}/franchises      -> list_category_franchises
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list_categories))
        .route(
            "/{category_id}/franchises",
            get(franchises::list_category_franchises),
        )
}
