/**
 * Database Handle
 *
 * `Database` is created once at startup and cloned into every handler. The
 * SQLite pool behind it is opened on first use: the first caller connects
 * and runs migrations, concurrent callers wait on the same initialization,
 * and a failed attempt leaves the handle empty so the next request retries.
 */

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

/// URL for a private in-memory database
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

const FILE_POOL_SIZE: u32 = 8;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Lazily-connected, shared database pool
#[derive(Debug, Clone)]
pub struct Database {
    url: Arc<str>,
    pool: Arc<OnceCell<SqlitePool>>,
}

impl Database {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Arc::from(url.into()),
            pool: Arc::new(OnceCell::new()),
        }
    }

    /// Fresh private in-memory database
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_URL)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_connected(&self) -> bool {
        self.pool.initialized()
    }

    /// Get the pool, connecting and migrating on first use
    ///
    /// # Errors
    /// Connection or migration failure. Nothing is cached on error.
    pub async fn pool(&self) -> Result<&SqlitePool, sqlx::Error> {
        self.pool.get_or_try_init(|| connect(&self.url)).await
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = if is_memory_url(url) {
        // Every connection to :memory: is a separate database, so pin a
        // single connection for the life of the pool.
        let options = SqliteConnectOptions::from_str(url)?.foreign_keys(true);
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);
        SqlitePoolOptions::new()
            .max_connections(FILE_POOL_SIZE)
            .connect_with(options)
            .await?
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to run database migrations: {}", e);
            sqlx::Error::Migrate(Box::new(e))
        })?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
