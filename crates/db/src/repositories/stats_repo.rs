//! Aggregate statistics across the franchise tables.

use sqlx::MySqlConnection;

use crate::models::stats::{CategoryCount, Statistics};
use crate::repositories::{CategoryRepo, FileRepo, FranchiseRepo};

/// Provides dataset-wide counts.
pub struct StatsRepo;

impl StatsRepo {
    /// Totals for each table plus franchises per category.
    ///
    /// The statements run one after another on `conn`; no transaction is
    /// opened, so concurrent writers may make the totals drift slightly.
    pub async fn get(conn: &mut MySqlConnection) -> Result<Statistics, sqlx::Error> {
        let total_categories = CategoryRepo::count(&mut *conn).await?;
        let total_franchises = FranchiseRepo::count(&mut *conn).await?;
        let total_files = FileRepo::count(&mut *conn).await?;
        let by_category = Self::franchises_by_category(conn).await?;

        Ok(Statistics {
            total_categories,
            total_franchises,
            total_files,
            by_category,
        })
    }

    /// Franchise count per category name, largest first.
    ///
    /// Left join so categories without franchises report zero.
    pub async fn franchises_by_category(
        conn: &mut MySqlConnection,
    ) -> Result<Vec<CategoryCount>, sqlx::Error> {
        sqlx::query_as::<_, CategoryCount>(
            "SELECT c.category_name AS category_name, COUNT(f.id) AS count \
             FROM tbl_category c \
             LEFT JOIN tbl_franchise f ON c.id = f.category_id \
             GROUP BY c.category_name \
             ORDER BY count DESC, category_name ASC",
        )
        .fetch_all(conn)
        .await
    }
}
