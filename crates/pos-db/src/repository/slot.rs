//! # Storage Slot Repository
//!
//! Named key/value slots, each holding one text document.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for the `storage_slots` table.
#[derive(Debug, Clone)]
pub struct SlotRepository {
    pool: SqlitePool,
}

impl SlotRepository {
    /// Creates a new SlotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SlotRepository { pool }
    }

    /// Reads a slot, `None` if it was never written.
    pub async fn get(&self, slot: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM storage_slots WHERE slot = ?1")
                .bind(slot)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Writes a slot, replacing any previous value.
    pub async fn put(&self, slot: &str, value: &str) -> DbResult<()> {
        debug!(slot = %slot, bytes = value.len(), "Writing storage slot");

        sqlx::query(
            r#"
            INSERT INTO storage_slots (slot, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(slot) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(slot)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
