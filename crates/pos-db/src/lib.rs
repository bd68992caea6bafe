//! # pos-db: Storage Layer for the POS Analytics Dashboard
//!
//! This crate provides persistence for the dashboard. It uses SQLite for
//! local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      POS Analytics Data Flow                            │
//! │                                                                         │
//! │  CLI command (record / delete / stats)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     pos-db (THIS CRATE)                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐  ┌──────────────┐ │   │
//! │  │   │   Database    │    │   Repositories   │  │  Migrations  │ │   │
//! │  │   │   (pool.rs)   │    │                  │  │  (embedded)  │ │   │
//! │  │   │               │    │ SlotRepository   │  │              │ │   │
//! │  │   │ SqlitePool    │◄───│ TransactionStore │  │ 001_storage_ │ │   │
//! │  │   │               │    │                  │  │   slots.sql  │ │   │
//! │  │   └───────────────┘    └──────────────────┘  └──────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   storage_slots["pos_transactions"] = [ {...}, {...} ]         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Storage slots and the transaction store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pos_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/pos.db")).await?;
//!
//! let log = db.transactions().load().await?;
//! let log = db.transactions().append(tx).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::slot::SlotRepository;
pub use repository::transaction::TransactionStore;
