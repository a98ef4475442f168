//! Handler for dataset statistics.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use kfranchise_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
pub async fn get_statistics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await?;
    let stats = StatsRepo::get(&mut conn).await?;

    Ok(Json(stats))
}
