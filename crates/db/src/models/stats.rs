//! Aggregate counts for `/api/stats`.

use serde::Serialize;
use sqlx::FromRow;

/// Franchise count for one category name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CategoryCount {
    pub category_name: String,
    pub count: i64,
}

/// Dataset totals plus the per-category breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub total_categories: i64,
    pub total_franchises: i64,
    pub total_files: i64,
    /// Ordered by `count` descending; categories without franchises
    /// appear with a count of zero.
    pub by_category: Vec<CategoryCount>,
}
