use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;

/// Connection settings for the franchise database.
///
/// Built once at startup and handed to
/// [`ConnectionProvider`](crate::ConnectionProvider); nothing reads the
/// environment after that.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub charset: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// How long a request waits for a connection before failing.
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default      |
    /// |---------------------------|--------------|
    /// | `DB_HOST`                 | `127.0.0.1`  |
    /// | `DB_PORT`                 | `3306`       |
    /// | `DB_NAME`                 | `wooridoori` |
    /// | `DB_USER`                 | `woori`      |
    /// | `DB_PASSWORD`             | (empty)      |
    /// | `DB_CHARSET`              | `utf8mb4`    |
    /// | `DB_MAX_CONNECTIONS`      | `10`         |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`          |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes the process env.
    ///
    /// Panics on unparseable numbers so misconfiguration fails at startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port: u16 = var("DB_PORT", "3306")
            .parse()
            .expect("DB_PORT must be a valid u16");

        let max_connections: u32 = var("DB_MAX_CONNECTIONS", "10")
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let acquire_timeout_secs: u64 = var("DB_ACQUIRE_TIMEOUT_SECS", "5")
            .parse()
            .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64");

        Self {
            host: var("DB_HOST", "127.0.0.1"),
            port,
            database: var("DB_NAME", "wooridoori"),
            user: var("DB_USER", "woori"),
            password: var("DB_PASSWORD", ""),
            charset: var("DB_CHARSET", "utf8mb4"),
            max_connections,
            acquire_timeout_secs,
        }
    }

    /// Driver options built field by field, so no connection URL carrying
    /// the password is ever formatted.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .charset(&self.charset);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .field("charset", &self.charset)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}
