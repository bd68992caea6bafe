//! # Transaction Store
//!
//! The persisted transaction log, newest first, stored as one JSON array in
//! the [`TRANSACTIONS_SLOT`] slot.
//!
//! ## Read / Write Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  load()                                                                │
//! │   ├── slot missing        → []   (first run)                           │
//! │   ├── slot unparsable     → []   (warn, old value left in place)       │
//! │   └── slot ok             → Vec<Transaction>                           │
//! │                                                                         │
//! │  append(tx) / remove(id)                                               │
//! │   1. load()                                                            │
//! │   2. journal::prepend_to_log / journal::remove_from_log                │
//! │   3. rewrite the whole slot                                            │
//! │   4. return the updated log ──► fed straight to the stats engine       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A corrupt slot is replaced by the next successful write.

use pos_core::journal::{prepend_to_log, remove_from_log};
use pos_core::{CoreError, Transaction, TRANSACTIONS_SLOT};
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::repository::slot::SlotRepository;

/// Load/append/remove over the persisted log.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    slots: SlotRepository,
}

impl TransactionStore {
    /// Creates a new TransactionStore.
    pub fn new(slots: SlotRepository) -> Self {
        TransactionStore { slots }
    }

    /// Reads the log.
    ///
    /// Missing or unparsable contents yield an empty log; only database
    /// failures are errors.
    pub async fn load(&self) -> DbResult<Vec<Transaction>> {
        let Some(raw) = self.slots.get(TRANSACTIONS_SLOT).await? else {
            debug!(slot = TRANSACTIONS_SLOT, "No stored transactions, starting empty");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Transaction>>(&raw) {
            Ok(log) => {
                debug!(count = log.len(), "Loaded transaction log");
                Ok(log)
            }
            Err(e) => {
                warn!(
                    slot = TRANSACTIONS_SLOT,
                    error = %e,
                    "Stored transaction log is unreadable, starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Prepends `transaction` and persists; returns the updated log.
    pub async fn append(&self, transaction: Transaction) -> DbResult<Vec<Transaction>> {
        let id = transaction.id;
        let log = prepend_to_log(&self.load().await?, transaction);
        self.save(&log).await?;

        info!(id, count = log.len(), "Transaction recorded");
        Ok(log)
    }

    /// Deletes the transaction with `id` and persists; returns the updated log.
    ///
    /// ## Errors
    /// - [`DbError::NotFound`] if no transaction carries `id`
    pub async fn remove(&self, id: i64) -> DbResult<Vec<Transaction>> {
        let log = remove_from_log(&self.load().await?, id).map_err(|e| match e {
            CoreError::TransactionNotFound(id) => DbError::not_found("Transaction", id.to_string()),
            other => DbError::Internal(other.to_string()),
        })?;
        self.save(&log).await?;

        info!(id, count = log.len(), "Transaction deleted");
        Ok(log)
    }

    /// Overwrites the whole log.
    pub async fn save(&self, log: &[Transaction]) -> DbResult<()> {
        let json = serde_json::to_string(log)?;
        self.slots.put(TRANSACTIONS_SLOT, &json).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
