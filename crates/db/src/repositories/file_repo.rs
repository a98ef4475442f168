//! Repository for the `tbl_file` table.

use kfranchise_core::types::DbId;
use sqlx::MySqlConnection;

use crate::models::file::File;

/// Column list for `tbl_file` queries.
const COLUMNS: &str = "id, uuid, file_origin_name, file_path, file_type, created_at";

/// Provides read operations for file metadata.
pub struct FileRepo;

impl FileRepo {
    /// Find a file by its ID.
    ///
    /// Not served over HTTP; file data reaches clients only through the
    /// franchise detail join. Used by the database tests to check that join
    /// against the stored row.
    pub async fn find_by_id(
        conn: &mut MySqlConnection,
        id: DbId,
    ) -> Result<Option<File>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tbl_file WHERE id = ?");
        sqlx::query_as::<_, File>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Total number of files.
    pub async fn count(conn: &mut MySqlConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tbl_file")
            .fetch_one(conn)
            .await
    }
}
