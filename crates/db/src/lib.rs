//! MySQL access for the franchise dataset.
//!
//! - [`config`]: explicit connection settings.
//! - [`provider`]: the pool plus scoped per-request connection acquisition.
//! - [`models`]: `FromRow` + `Serialize` record shapes.
//! - [`repositories`]: one zero-sized struct per table with read queries.

pub mod config;
pub mod models;
pub mod provider;
pub mod repositories;

pub use config::DatabaseConfig;
pub use provider::{ConnectionError, ConnectionProvider};

pub type DbPool = sqlx::MySqlPool;

/// Run the liveness query on an acquired connection.
pub async fn health_check(conn: &mut sqlx::MySqlConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").fetch_one(conn).await?;
    Ok(())
}
