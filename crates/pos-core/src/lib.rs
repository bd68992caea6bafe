//! # pos-core: Pure Business Logic for the POS Analytics Dashboard
//!
//! This crate is the **heart** of the dashboard. It contains the catalog,
//! the sales-entry rules and the statistics engine as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     POS Analytics Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation (apps/dashboard)                  │   │
//! │  │   KPI cards ── Trend ── Category bar/pie ── Top products        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ record / delete / change period        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pos-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  journal  │  │   stats   │  │   money   │  │   │
//! │  │   │  Product  │  │ SaleEntry │  │  Engine   │  │   Money   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 pos-db (Storage Layer)                          │   │
//! │  │            SQLite storage slot holding the transaction log      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction, PeriodFilter)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed product catalog and category display names
//! - [`journal`] - Turning a sale entry into a Transaction
//! - [`stats`] - The statistics engine behind the dashboard
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for sale entries
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use pos_core::{PeriodFilter, ProductCatalog, SaleEntry, StatsEngine};
//!
//! let catalog = ProductCatalog::builtin().unwrap();
//! let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
//!
//! let entry = SaleEntry {
//!     product_id: 1,
//!     quantity: 3,
//!     date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
//! };
//! let tx = entry.into_transaction(&catalog, &[], now).unwrap();
//!
//! let stats = StatsEngine::new().compute(&[tx], PeriodFilter::Daily, &now);
//! assert_eq!(stats.period_transaction_count, 1);
//! assert_eq!(stats.trend.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod journal;
pub mod money;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{category_label, ProductCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use journal::SaleEntry;
pub use money::Money;
pub use stats::{
    AggregatedStats, CategoryPoint, CategorySales, PeriodWindow, ProductSales, StatsEngine,
    TrendPoint,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name of the storage slot that holds the serialized transaction log.
pub const TRANSACTIONS_SLOT: &str = "pos_transactions";

/// Number of entries in the ranked product list.
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Maximum quantity accepted for a single sale entry.
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
