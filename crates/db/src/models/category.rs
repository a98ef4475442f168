//! Category model.

use kfranchise_core::timestamp;
use kfranchise_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tbl_category` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub category_name: String,
    pub category_color: Option<String>,
    #[serde(serialize_with = "timestamp::serialize_option")]
    pub created_at: Option<Timestamp>,
}
