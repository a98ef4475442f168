//! Handlers for franchise listing and lookup.
//!
//! The category-scoped listing is the general listing with its category
//! filter fixed from the path; both go through [`list_with_filter`].

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use kfranchise_core::error::CoreError;
use kfranchise_core::types::DbId;
use kfranchise_db::models::franchise::{FranchiseDetail, FranchiseListFilter};
use kfranchise_db::repositories::FranchiseRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidPath, ValidQuery};
use crate::query::{FranchiseListParams, PaginationParams};
use crate::state::AppState;

/// Run a validated listing on a freshly acquired connection.
async fn list_with_filter(
    state: &AppState,
    filter: &FranchiseListFilter,
) -> AppResult<Vec<FranchiseDetail>> {
    let mut conn = state.db.acquire().await?;
    let franchises = FranchiseRepo::list(&mut conn, filter).await?;

    tracing::debug!(
        skip = filter.skip,
        limit = filter.limit,
        category_id = ?filter.category_id,
        count = franchises.len(),
        "Listed franchises",
    );

    Ok(franchises)
}

/// GET /api/franchises
///
/// Paginated listing ordered by id, optionally filtered by `category_id`.
pub async fn list_franchises(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<FranchiseListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let franchises = list_with_filter(&state, &filter).await?;

    Ok(Json(franchises))
}

/// GET /api/franchises/{id}
pub async fn get_franchise(
    State(state): State<AppState>,
    ValidPath(franchise_id): ValidPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.acquire().await?;
    let franchise = FranchiseRepo::find_by_id(&mut conn, franchise_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Franchise",
            id: franchise_id,
        }))?;

    Ok(Json(franchise))
}

/// GET /api/categories/{category_id}/franchises
///
/// Same result as `GET /api/franchises?category_id=...` with the same
/// pagination.
pub async fn list_category_franchises(
    State(state): State<AppState>,
    ValidPath(category_id): ValidPath<DbId>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter(Some(category_id))?;
    let franchises = list_with_filter(&state, &filter).await?;

    Ok(Json(franchises))
}
