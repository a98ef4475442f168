//! Franchise models and query filters.

use kfranchise_core::timestamp;
use kfranchise_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tbl_franchise` table, without joins.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Franchise {
    pub id: DbId,
    pub category_id: DbId,
    pub file_id: DbId,
    pub fran_name: String,
    #[serde(serialize_with = "timestamp::serialize_option")]
    pub created_at: Option<Timestamp>,
}

/// Franchise joined with its category name and file path.
///
/// This is the shape of every list, search and get response.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FranchiseDetail {
    pub id: DbId,
    pub fran_name: String,
    pub category_id: DbId,
    pub category_name: String,
    pub file_id: DbId,
    pub file_path: String,
    pub file_origin_name: String,
    #[serde(serialize_with = "timestamp::serialize_option")]
    pub created_at: Option<Timestamp>,
}

/// Validated parameters for a paginated franchise listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FranchiseListFilter {
    pub skip: i64,
    pub limit: i64,
    /// `None` means every category.
    pub category_id: Option<DbId>,
}

/// Validated parameters for a franchise search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FranchiseSearch {
    /// Trimmed, non-empty user query. Matched literally.
    pub query: String,
    pub category_id: Option<DbId>,
    pub limit: i64,
}
