//! # Sales Journal
//!
//! Turning a "Record New Sale" form submission into a [`Transaction`], and
//! the two mutations the log supports.
//!
//! ## Entry Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SaleEntry { product_id, quantity, date }                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate (product id, quantity)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog lookup ── snapshot name / category / unit price               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total = quantity × unit price  (frozen, never recomputed)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  prepend_to_log ──► store rewrites the slot ──► stats recomputed       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ProductCatalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Transaction;
use crate::validation::{validate_product_id, validate_quantity};

/// The sales-entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleEntry {
    pub product_id: i64,
    pub quantity: i64,
    pub date: NaiveDate,
}

impl SaleEntry {
    /// Validates the entry and builds the transaction to record.
    ///
    /// `log` is the current transaction log, used only to keep ids unique;
    /// `created_at` is the instant the entry is submitted.
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] for a non-positive product id or a
    ///   quantity outside `1..=MAX_ITEM_QUANTITY`
    /// - [`CoreError::ProductNotFound`] if the id is not in the catalog
    pub fn into_transaction(
        self,
        catalog: &ProductCatalog,
        log: &[Transaction],
        created_at: DateTime<Utc>,
    ) -> CoreResult<Transaction> {
        validate_product_id(self.product_id)?;
        validate_quantity(self.quantity)?;

        let product = catalog.require(self.product_id)?;
        let total = product.unit_price().multiply_quantity(self.quantity);

        Ok(Transaction {
            id: next_transaction_id(created_at, log),
            product_id: product.id,
            product_name: product.name.clone(),
            category: product.category.clone(),
            quantity: self.quantity,
            unit_price_cents: product.unit_price_cents,
            total_cents: total.cents(),
            date: self.date,
            created_at,
        })
    }
}

/// Total shown on the form before it is submitted.
///
/// Zero while no valid product is selected.
pub fn preview_total(catalog: &ProductCatalog, product_id: i64, quantity: i64) -> Money {
    catalog
        .get(product_id)
        .map(|product| product.unit_price().multiply_quantity(quantity))
        .unwrap_or_default()
}

/// Id for a transaction created at `created_at`.
///
/// The creation instant in milliseconds, bumped past the largest id already
/// in the log so two entries within the same millisecond stay unique and
/// ids stay monotonic.
pub fn next_transaction_id(created_at: DateTime<Utc>, log: &[Transaction]) -> i64 {
    let from_clock = created_at.timestamp_millis();
    match log.iter().map(|t| t.id).max() {
        Some(last) if last >= from_clock => last + 1,
        _ => from_clock,
    }
}

/// Returns a new log with `transaction` as the newest (first) entry.
pub fn prepend_to_log(log: &[Transaction], transaction: Transaction) -> Vec<Transaction> {
    let mut updated = Vec::with_capacity(log.len() + 1);
    updated.push(transaction);
    updated.extend_from_slice(log);
    updated
}

/// Returns a new log without the transaction carrying `id`.
///
/// ## Errors
/// - [`CoreError::TransactionNotFound`] if no entry has that id
pub fn remove_from_log(log: &[Transaction], id: i64) -> CoreResult<Vec<Transaction>> {
    if !log.iter().any(|t| t.id == id) {
        return Err(CoreError::TransactionNotFound(id));
    }

    Ok(log.iter().filter(|t| t.id != id).cloned().collect())
}

// =============================================================================
// Unit Tests
// =============================================================================
