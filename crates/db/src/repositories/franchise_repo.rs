//! Repository for the `tbl_franchise` table and its joined detail view.

use kfranchise_core::franchise::{contains_pattern, LIKE_ESCAPE};
use kfranchise_core::types::DbId;
use sqlx::{MySql, MySqlConnection, QueryBuilder};

use crate::models::franchise::{
    Franchise, FranchiseDetail, FranchiseListFilter, FranchiseSearch,
};

/// Column list for raw `tbl_franchise` queries.
const COLUMNS: &str = "id, category_id, file_id, fran_name, created_at";

/// Select + joins producing [`FranchiseDetail`] rows.
///
/// Inner joins: a franchise whose category or file row is missing is not
/// returned.
const DETAIL_SELECT: &str = "\
    SELECT f.id AS id, f.fran_name AS fran_name, \
           f.category_id AS category_id, c.category_name AS category_name, \
           f.file_id AS file_id, fi.file_path AS file_path, \
           fi.file_origin_name AS file_origin_name, f.created_at AS created_at \
    FROM tbl_franchise f \
    JOIN tbl_category c ON f.category_id = c.id \
    JOIN tbl_file fi ON f.file_id = fi.id";

/// Provides read operations for franchises.
pub struct FranchiseRepo;

impl FranchiseRepo {
    /// List franchise details ordered by id, optionally within one category.
    pub async fn list(
        conn: &mut MySqlConnection,
        filter: &FranchiseListFilter,
    ) -> Result<Vec<FranchiseDetail>, sqlx::Error> {
        let mut builder = Self::list_query(filter);
        builder
            .build_query_as::<FranchiseDetail>()
            .fetch_all(conn)
            .await
    }

    /// Find a franchise detail by its ID.
    pub async fn find_by_id(
        conn: &mut MySqlConnection,
        id: DbId,
    ) -> Result<Option<FranchiseDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE f.id = ?");
        sqlx::query_as::<_, FranchiseDetail>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find the raw franchise row (no joins) by its ID.
    ///
    /// Not served over HTTP. Test support: lets the database tests compare a
    /// [`FranchiseDetail`] against the underlying `tbl_franchise` row.
    pub async fn find_record_by_id(
        conn: &mut MySqlConnection,
        id: DbId,
    ) -> Result<Option<Franchise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tbl_franchise WHERE id = ?");
        sqlx::query_as::<_, Franchise>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Search franchise and category names for a literal substring,
    /// ignoring case. Results are ordered by franchise name.
    pub async fn search(
        conn: &mut MySqlConnection,
        search: &FranchiseSearch,
    ) -> Result<Vec<FranchiseDetail>, sqlx::Error> {
        let mut builder = Self::search_query(search);
        builder
            .build_query_as::<FranchiseDetail>()
            .fetch_all(conn)
            .await
    }

    /// Total number of franchises.
    pub async fn count(conn: &mut MySqlConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tbl_franchise")
            .fetch_one(conn)
            .await
    }

    // -----------------------------------------------------------------------
    // Query builders
    // -----------------------------------------------------------------------

    fn list_query(filter: &FranchiseListFilter) -> QueryBuilder<'static, MySql> {
        let mut builder = QueryBuilder::new(DETAIL_SELECT);

        if let Some(category_id) = filter.category_id {
            builder.push(" WHERE f.category_id = ").push_bind(category_id);
        }

        builder
            .push(" ORDER BY f.id ASC LIMIT ")
            .push_bind(filter.limit)
            .push(" OFFSET ")
            .push_bind(filter.skip);

        builder
    }

    fn search_query(search: &FranchiseSearch) -> QueryBuilder<'static, MySql> {
        let pattern = contains_pattern(&search.query);
        let escape = format!(" ESCAPE '{LIKE_ESCAPE}'");

        let mut builder = QueryBuilder::new(DETAIL_SELECT);
        builder
            .push(" WHERE (LOWER(f.fran_name) LIKE LOWER(")
            .push_bind(pattern.clone())
            .push(")")
            .push(&escape)
            .push(" OR LOWER(c.category_name) LIKE LOWER(")
            .push_bind(pattern)
            .push(")")
            .push(&escape)
            .push(")");

        if let Some(category_id) = search.category_id {
            builder.push(" AND f.category_id = ").push_bind(category_id);
        }

        // Id breaks ties between equal names so repeated searches agree.
        builder
            .push(" ORDER BY f.fran_name ASC, f.id ASC LIMIT ")
            .push_bind(search.limit);

        builder
    }
}
