//! Repository for the `tbl_category` table.

use sqlx::MySqlConnection;

use crate::models::category::Category;

/// Column list for `tbl_category` queries.
const COLUMNS: &str = "id, category_name, category_color, created_at";

/// Provides read operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by id ascending.
    pub async fn list(conn: &mut MySqlConnection) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tbl_category ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(conn).await
    }

    /// Total number of categories.
    pub async fn count(conn: &mut MySqlConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tbl_category")
            .fetch_one(conn)
            .await
    }
}
