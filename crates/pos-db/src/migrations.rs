//! # Schema
//!
//! The dashboard persists one table, `storage_slots`: a named slot per
//! document, the sales log being the only document today (slot
//! `pos_transactions`). Migrations live in `migrations/sqlite/` at the
//! workspace root and are compiled into the binary.
//!
//! New schema goes in a new `NNN_*.sql` file; applied files are never edited
//! because sqlx checksums them.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies any migration not yet recorded in `_sqlx_migrations`.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    MIGRATOR.run(pool).await?;
    debug!(count = MIGRATOR.iter().count(), "Schema up to date");
    Ok(())
}
