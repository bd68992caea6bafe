//! # Application State
//!
//! Everything a command needs, built once per invocation.
//!
//! ```text
//! ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐
//! │    Database      │ │  ProductCatalog  │ │     AppConfig        │
//! │                  │ │                  │ │                      │
//! │  • SQLite pool   │ │  • Fixed product │ │  • Currency symbol   │
//! │  • Transaction   │ │    list          │ │  • Default period    │
//! │    store         │ │                  │ │                      │
//! └──────────────────┘ └──────────────────┘ └──────────────────────┘
//! ```

use pos_core::{ProductCatalog, StatsEngine};
use pos_db::{Database, DbConfig, TransactionStore};
use tracing::info;

use crate::config::AppConfig;
use crate::error::ApiError;

/// Shared state passed to every command.
#[derive(Debug, Clone)]
pub struct AppState {
    db: Database,
    catalog: ProductCatalog,
    config: AppConfig,
    engine: StatsEngine,
}

impl AppState {
    pub fn new(db: Database, catalog: ProductCatalog, config: AppConfig) -> Self {
        AppState {
            db,
            catalog,
            config,
            engine: StatsEngine::new(),
        }
    }

    /// Opens the configured database and loads the catalog.
    pub async fn open(config: AppConfig) -> Result<Self, ApiError> {
        let db_path = config.resolve_database_path()?;
        info!(db_path = %db_path.display(), "Database path determined");

        let db = Database::new(DbConfig::new(db_path)).await?;
        let catalog = config.load_catalog()?;
        info!(products = catalog.len(), "Catalog loaded");

        Ok(AppState::new(db, catalog, config))
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Shorthand for `db().transactions()`.
    pub fn transactions(&self) -> TransactionStore {
        self.db.transactions()
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn engine(&self) -> &StatsEngine {
        &self.engine
    }

    /// Currency symbol for rendering amounts.
    pub fn currency(&self) -> &str {
        &self.config.currency_symbol
    }
}
