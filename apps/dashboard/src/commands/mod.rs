//! # Dashboard Commands
//!
//! One function per user action. Commands return data; printing happens in
//! [`crate::execute`] via [`crate::render`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Product listing
//! ├── sale.rs     ◄─── Record, preview, delete, journal
//! ├── stats.rs    ◄─── Dashboard statistics
//! └── seed.rs     ◄─── Demo data
//! ```
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  record / delete                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  TransactionStore::append / remove ──► returns the updated log         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StatsEngine::compute(updated log, period, now) ◄── explicit recompute │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Response { ..., stats }                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command takes `now` as a parameter so "today" is decided once, by
//! the caller.

pub mod catalog;
pub mod sale;
pub mod seed;
pub mod stats;
