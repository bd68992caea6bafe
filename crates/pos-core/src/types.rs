//! # Domain Types
//!
//! Core domain types used throughout the dashboard.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │    Product      │   │     Transaction      │   │  PeriodFilter   │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  id (1-based)   │──►│  product_id          │   │  Daily          │  │
//! │  │  name           │──►│  product_name  (copy)│   │  Weekly         │  │
//! │  │  category       │──►│  category      (copy)│   │  Monthly        │  │
//! │  │  unit_price     │──►│  unit_price    (copy)│   │  Yearly         │  │
//! │  │  inventory      │   │  total = qty × price │   │  All            │  │
//! │  └─────────────────┘   └──────────────────────┘   └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A transaction copies name, category and price from the catalog when it is
//! created. Later catalog changes never touch historical transactions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// 1-based position in the catalog dataset.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Category key (e.g. `snacks`), see [`crate::catalog::category_label`].
    pub category: String,

    pub description: String,

    /// Unit price in the smallest currency unit.
    pub unit_price_cents: i64,

    /// Stock on hand. Carried for display, never decremented by sales.
    pub inventory: i64,
}

impl Product {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// One recorded sale.
///
/// Never mutated after creation: it is either in the log or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Transaction {
    /// Unique, monotonic id derived from the creation instant (ms).
    pub id: i64,

    pub product_id: i64,

    /// Product name at time of sale (frozen).
    pub product_name: String,

    /// Category key at time of sale (frozen).
    pub category: String,

    pub quantity: i64,

    /// Unit price at time of sale (frozen).
    pub unit_price_cents: i64,

    /// `quantity × unit_price_cents`, computed once at creation.
    pub total_cents: i64,

    /// Calendar day of the sale (no time component).
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Instant the entry was recorded.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the transaction total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Period Filter
// =============================================================================

/// The reporting period selected on the dashboard.
///
/// Selects both the inclusion threshold and the trend bucket count.
/// Unrecognized values map to [`PeriodFilter::All`], which includes the
/// whole log instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PeriodFilter {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// No filtering. Also the fallback for unknown filter names.
    #[serde(other)]
    All,
}

impl PeriodFilter {
    /// The four filters offered by the period selector.
    pub const SELECTABLE: [PeriodFilter; 4] = [
        PeriodFilter::Daily,
        PeriodFilter::Weekly,
        PeriodFilter::Monthly,
        PeriodFilter::Yearly,
    ];

    /// Number of daily buckets in the trend series.
    ///
    /// `All` keeps the 30-day rolling chart.
    pub const fn trend_days(&self) -> u32 {
        match self {
            PeriodFilter::Daily => 1,
            PeriodFilter::Weekly => 7,
            PeriodFilter::Monthly => 30,
            PeriodFilter::Yearly => 365,
            PeriodFilter::All => 30,
        }
    }

    /// Heading used on KPI cards ("Weekly Sales", "All Time Sales").
    pub const fn label(&self) -> &'static str {
        match self {
            PeriodFilter::Daily => "Daily",
            PeriodFilter::Weekly => "Weekly",
            PeriodFilter::Monthly => "Monthly",
            PeriodFilter::Yearly => "Yearly",
            PeriodFilter::All => "All Time",
        }
    }

    /// Lowercase wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PeriodFilter::Daily => "daily",
            PeriodFilter::Weekly => "weekly",
            PeriodFilter::Monthly => "monthly",
            PeriodFilter::Yearly => "yearly",
            PeriodFilter::All => "all",
        }
    }

    /// Parses a filter name, falling back to `All` for anything unknown.
    pub fn parse_lenient(value: &str) -> PeriodFilter {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => PeriodFilter::Daily,
            "weekly" => PeriodFilter::Weekly,
            "monthly" => PeriodFilter::Monthly,
            "yearly" => PeriodFilter::Yearly,
            _ => PeriodFilter::All,
        }
    }
}

impl FromStr for PeriodFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PeriodFilter::parse_lenient(s))
    }
}

impl fmt::Display for PeriodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
