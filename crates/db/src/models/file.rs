//! Uploaded file metadata.

use kfranchise_core::timestamp;
use kfranchise_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tbl_file` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct File {
    pub id: DbId,
    /// Generated storage identifier.
    pub uuid: String,
    pub file_origin_name: String,
    pub file_path: String,
    pub file_type: String,
    #[serde(serialize_with = "timestamp::serialize_option")]
    pub created_at: Option<Timestamp>,
}
