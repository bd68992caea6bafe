//! # Repository Module
//!
//! Storage repositories for the dashboard.
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CLI command                                                           │
//! │       │                                                                 │
//! │       │  db.transactions().append(tx)                                  │
//! │       ▼                                                                 │
//! │  TransactionStore                                                      │
//! │  ├── load(&self)        → Vec<Transaction>                             │
//! │  ├── append(&self, tx)  → Vec<Transaction> (updated log)               │
//! │  └── remove(&self, id)  → Vec<Transaction> (updated log)               │
//! │       │                                                                 │
//! │       │  whole log as one JSON document                                │
//! │       ▼                                                                 │
//! │  SlotRepository                                                        │
//! │  ├── get(&self, slot)   → Option<String>                               │
//! │  └── put(&self, slot, value)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  storage_slots table                                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`slot::SlotRepository`] - Raw named slots
//! - [`transaction::TransactionStore`] - The persisted transaction log

pub mod slot;
pub mod transaction;
