//! Handlers for categories.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use kfranchise_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/categories
///
/// List every category ordered by id.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await?;
    let categories = CategoryRepo::list(&mut conn).await?;

    tracing::debug!(count = categories.len(), "Listed categories");

    Ok(Json(categories))
}
