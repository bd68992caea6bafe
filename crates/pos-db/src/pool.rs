//! # Database Handle
//!
//! Opens the dashboard's SQLite file and hands out the stores built on it.
//!
//! ```text
//! AppConfig.database_path
//!       │
//!       ▼
//! DbConfig::new(path) ──► Database::new ──► migrations ──► storage_slots
//!                              │
//!                              ├── db.slots()         raw key/value access
//!                              └── db.transactions()  the sales log
//! ```
//!
//! One dashboard invocation performs at most one log rewrite, so the pool is
//! small. WAL keeps a concurrent `stats` read from blocking on a `record`.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::slot::SlotRepository;
use crate::repository::transaction::TransactionStore;

const IN_MEMORY: &str = ":memory:";

/// Where the dashboard database lives.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// SQLite file, created on first open. `:memory:` for a throwaway database.
    pub database_path: PathBuf,

    /// Pool size. An in-memory database is private to its connection, so it
    /// must stay at 1.
    pub max_connections: u32,

    /// How long to wait for the file lock held by another invocation.
    pub busy_timeout: Duration,
}

impl DbConfig {
    /// Configuration for a database file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 2,
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Configuration for an isolated in-memory database (tests).
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY),
            max_connections: 1,
            busy_timeout: Duration::from_secs(1),
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == IN_MEMORY
    }

    fn connect_options(&self) -> SqliteConnectOptions {
        let options = if self.is_in_memory() {
            SqliteConnectOptions::new().in_memory(true)
        } else {
            SqliteConnectOptions::new()
                .filename(&self.database_path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
        };

        options
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(self.busy_timeout)
    }
}

/// Open dashboard database with its schema applied.
///
/// Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (creating if needed) the database and applies pending migrations.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(path = %config.database_path.display(), "Opening database");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            // keeps an in-memory database alive between queries
            .min_connections(1)
            .connect_with(config.connect_options())
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        debug!(max_connections = config.max_connections, "Pool ready");

        let db = Database { pool };
        db.run_migrations().await?;
        Ok(db)
    }

    /// Brings the schema up to date. Already-applied migrations are skipped.
    pub async fn run_migrations(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    /// The underlying pool, for queries outside the stores.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Raw storage slot access.
    pub fn slots(&self) -> SlotRepository {
        SlotRepository::new(self.pool.clone())
    }

    /// The persisted sales log.
    ///
    /// ```rust,ignore
    /// let log = db.transactions().remove(1_710_000_000_000).await?;
    /// ```
    pub fn transactions(&self) -> TransactionStore {
        TransactionStore::new(self.slots())
    }

    /// Waits for open connections to finish and closes the pool.
    pub async fn close(&self) {
        debug!("Closing database");
        self.pool.close().await;
    }
}
