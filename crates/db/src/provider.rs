//! Connection Provider: owns the pool and hands out one scoped connection
//! per request.
//!
//! A [`PoolConnection`] returns itself to the pool when dropped, so a
//! handler releases its connection on success, on `?` and on early return
//! alike.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::pool::PoolConnection;
use sqlx::MySql;

use crate::config::DatabaseConfig;
use crate::DbPool;

/// The database could not be reached or rejected the session.
///
/// The message has already been scrubbed of the configured password.
#[derive(Debug, thiserror::Error)]
#[error("Database connection error: {0}")]
pub struct ConnectionError(pub String);

/// Shared handle to the pool. Cheap to clone.
#[derive(Clone)]
pub struct ConnectionProvider {
    pool: DbPool,
    secret: Option<String>,
}

impl ConnectionProvider {
    /// Build a lazily-connecting pool from `config`.
    ///
    /// No connection is opened here; the first [`acquire`](Self::acquire)
    /// does that, so the server can start while MySQL is down.
    pub fn new(config: &DatabaseConfig) -> Self {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy_with(config.connect_options());

        let secret = (!config.password.is_empty()).then(|| config.password.clone());

        Self { pool, secret }
    }

    /// Wrap an existing pool (e.g. one provided by `#[sqlx::test]`).
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool, secret: None }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Check out a connection for the duration of one request.
    pub async fn acquire(&self) -> Result<PoolConnection<MySql>, ConnectionError> {
        self.pool.acquire().await.map_err(|e| {
            tracing::error!(error = %self.redact(&e.to_string()), "Failed to acquire connection");
            self.connection_error(&e)
        })
    }

    /// Acquire a connection and run the liveness query on it.
    pub async fn ping(&self) -> Result<(), ConnectionError> {
        let mut conn = self.acquire().await?;
        crate::health_check(&mut conn)
            .await
            .map_err(|e| self.connection_error(&e))
    }

    /// Convert a driver error into a [`ConnectionError`] with secrets removed.
    pub fn connection_error(&self, err: &sqlx::Error) -> ConnectionError {
        ConnectionError(self.redact(&err.to_string()))
    }

    fn redact(&self, message: &str) -> String {
        match &self.secret {
            Some(secret) => message.replace(secret.as_str(), "***"),
            None => message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_password(password: &str) -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            database: "kfranchise_test".to_string(),
            user: "nobody".to_string(),
            password: password.to_string(),
            charset: "utf8mb4".to_string(),
            max_connections: 1,
            acquire_timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn connection_error_redacts_password() {
        let provider = ConnectionProvider::new(&config_with_password("s3cr3t-pw"));
        let err = provider.connection_error(&sqlx::Error::Configuration(
            "access denied for password s3cr3t-pw".into(),
        ));
        assert!(!err.to_string().contains("s3cr3t-pw"));
        assert!(err.to_string().contains("***"));
    }

    #[tokio::test]
    async fn acquire_against_unreachable_host_fails_with_connection_error() {
        let provider = ConnectionProvider::new(&config_with_password("s3cr3t-pw"));
        let err = provider.acquire().await.unwrap_err();
        assert!(err.to_string().starts_with("Database connection error:"));
        assert!(provider.ping().await.is_err());
    }
}
