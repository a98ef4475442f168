//! Repository tests against a live MySQL database.
//!
//! Run with: DATABASE_URL=mysql://... cargo test -p kfranchise-db --features mysql-tests

#![cfg(feature = "mysql-tests")]

use assert_matches::assert_matches;
use kfranchise_db::models::franchise::{FranchiseListFilter, FranchiseSearch};
use kfranchise_db::repositories::{CategoryRepo, FileRepo, FranchiseRepo, StatsRepo};
use sqlx::MySqlPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn list(skip: i64, limit: i64, category_id: Option<i64>) -> FranchiseListFilter {
    FranchiseListFilter {
        skip,
        limit,
        category_id,
    }
}

fn search(query: &str, category_id: Option<i64>) -> FranchiseSearch {
    FranchiseSearch {
        query: query.to_string(),
        category_id,
        limit: 100,
    }
}

// ---------------------------------------------------------------------------
// Categories & files
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn categories_are_listed_by_id(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();
    let categories = CategoryRepo::list(&mut conn).await.unwrap();

    let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(categories[0].category_name, "Cafe");
    assert_eq!(categories[1].category_color, None);
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn file_lookup_by_id(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();

    let file = FileRepo::find_by_id(&mut conn, 5).await.unwrap().unwrap();
    assert_eq!(file.file_path, "/f/5.png");
    assert_eq!(file.uuid, "a1b2c3");

    assert_matches!(FileRepo::find_by_id(&mut conn, 999).await, Ok(None));
}

// ---------------------------------------------------------------------------
// Franchise listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn list_orders_by_id_and_paginates(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();

    let all = FranchiseRepo::list(&mut conn, &list(0, 100, None)).await.unwrap();
    let ids: Vec<i64> = all.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![10, 11, 12, 13]);

    let page = FranchiseRepo::list(&mut conn, &list(1, 2, None)).await.unwrap();
    let ids: Vec<i64> = page.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![11, 12]);
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn list_filters_by_category(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();

    let cafes = FranchiseRepo::list(&mut conn, &list(0, 100, Some(1))).await.unwrap();
    assert_eq!(cafes.len(), 2);
    assert!(cafes.iter().all(|f| f.category_name == "Cafe"));

    let none = FranchiseRepo::list(&mut conn, &list(0, 100, Some(0))).await.unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn find_by_id_joins_category_and_file(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();

    let detail = FranchiseRepo::find_by_id(&mut conn, 10).await.unwrap().unwrap();
    assert_eq!(detail.fran_name, "BrewCo");
    assert_eq!(detail.category_name, "Cafe");
    assert_eq!(detail.file_path, "/f/5.png");
    assert_eq!(detail.file_origin_name, "brewco.png");

    assert_matches!(FranchiseRepo::find_by_id(&mut conn, 999).await, Ok(None));
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn find_record_returns_raw_row(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();

    let record = FranchiseRepo::find_record_by_id(&mut conn, 13)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.category_id, 2);
    assert_eq!(record.file_id, 8);
    assert!(record.created_at.is_none());
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn search_is_case_insensitive_and_ordered_by_name(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();

    let hits = FranchiseRepo::search(&mut conn, &search("BREW", None)).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 10);

    // Category name matches pull in every franchise of the category.
    let cafes = FranchiseRepo::search(&mut conn, &search("cafe", None)).await.unwrap();
    let names: Vec<&str> = cafes.iter().map(|f| f.fran_name.as_str()).collect();
    assert_eq!(names, vec!["Bean There", "BrewCo"]);
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn search_treats_wildcards_literally(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();

    let hits = FranchiseRepo::search(&mut conn, &search("%_", None)).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 13);

    let misses = FranchiseRepo::search(&mut conn, &search("xyz", None)).await.unwrap();
    assert!(misses.is_empty());
}

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn search_respects_category_and_limit(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();

    let scoped = FranchiseRepo::search(&mut conn, &search("e", Some(2))).await.unwrap();
    assert!(scoped.iter().all(|f| f.category_id == 2));

    let capped = FranchiseSearch {
        limit: 1,
        ..search("e", None)
    };
    let hits = FranchiseRepo::search(&mut conn, &capped).await.unwrap();
    assert_eq!(hits.len(), 1);
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false, fixtures("schema", "seed"))]
async fn statistics_count_every_table(pool: MySqlPool) {
    let mut conn = pool.acquire().await.unwrap();
    let stats = StatsRepo::get(&mut conn).await.unwrap();

    assert_eq!(stats.total_categories, 3);
    assert_eq!(stats.total_franchises, 4);
    assert_eq!(stats.total_files, 4);

    let breakdown: Vec<(&str, i64)> = stats
        .by_category
        .iter()
        .map(|c| (c.category_name.as_str(), c.count))
        .collect();
    assert_eq!(breakdown, vec![("Cafe", 2), ("Chicken", 2), ("Bakery", 0)]);

    let summed: i64 = stats.by_category.iter().map(|c| c.count).sum();
    assert_eq!(summed, stats.total_franchises);
}
