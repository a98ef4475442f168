//! Handler for franchise search.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use kfranchise_db::repositories::FranchiseRepo;

use crate::error::AppResult;
use crate::extract::ValidQuery;
use crate::query::SearchParams;
use crate::state::AppState;

/// GET /api/search?q=
///
/// Case-insensitive literal substring match on franchise or category name,
/// ordered by franchise name. No match is an empty list, not an error.
pub async fn search_franchises(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let search = params.into_search()?;

    let mut conn = state.db.acquire().await?;
    let results = FranchiseRepo::search(&mut conn, &search).await?;

    tracing::debug!(
        query = %search.query,
        category_id = ?search.category_id,
        limit = search.limit,
        results = results.len(),
        "Search executed",
    );

    Ok(Json(results))
}
