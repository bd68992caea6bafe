//! # Configuration
//!
//! Application configuration resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--db`)
//! 2. Environment variables (`POS_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup.

use directories::ProjectDirs;
use pos_core::{PeriodFilter, ProductCatalog};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use crate::error::{ApiError, ErrorCode};

/// File name of the database inside the platform data directory.
pub const DATABASE_FILE_NAME: &str = "pos.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Explicit database file. `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Alternative catalog dataset. `None` means the built-in one.
    pub catalog_path: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Period used by `stats` when `--period` is not given
    pub default_period: PeriodFilter,
}

impl Default for AppConfig {
    /// Thai baht, daily period, built-in catalog, platform database path.
    fn default() -> Self {
        AppConfig {
            database_path: None,
            catalog_path: None,
            currency_symbol: "฿".to_string(),
            default_period: PeriodFilter::Daily,
        }
    }
}

impl AppConfig {
    /// Creates a configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `POS_DB_PATH`: Database file
    /// - `POS_CATALOG_PATH`: Catalog dataset (JSON)
    /// - `POS_CURRENCY_SYMBOL`: Currency symbol
    /// - `POS_DEFAULT_PERIOD`: `daily`, `weekly`, `monthly`, `yearly` or `all`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = get("POS_DB_PATH") {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(path) = get("POS_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(symbol) = get("POS_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(period) = get("POS_DEFAULT_PERIOD") {
            config.default_period = PeriodFilter::parse_lenient(&period);
        }

        config
    }

    /// Applies a `--db` flag on top of the environment.
    pub fn with_database_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.database_path = path;
        }
        self
    }

    /// Determines the database file path.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.pos.analytics/pos.db`
    /// - **Windows**: `%APPDATA%\pos\analytics\data\pos.db`
    /// - **Linux**: `~/.local/share/analytics/pos.db`
    pub fn resolve_database_path(&self) -> Result<PathBuf, ApiError> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let proj_dirs = ProjectDirs::from("com", "pos", "analytics")
            .ok_or_else(|| ApiError::internal("Could not determine app data directory"))?;

        let data_dir = proj_dirs.data_dir();

        // Create directory if it doesn't exist
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DATABASE_FILE_NAME))
    }

    /// Loads the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<ProductCatalog, ApiError> {
        let Some(path) = &self.catalog_path else {
            return Ok(ProductCatalog::builtin()?);
        };

        debug!(path = %path.display(), "Loading catalog file");
        let json = std::fs::read_to_string(path).map_err(|e| {
            ApiError::new(
                ErrorCode::CatalogError,
                format!("Cannot read catalog {}: {}", path.display(), e),
            )
        })?;

        Ok(ProductCatalog::from_json(&json)?)
    }
}
