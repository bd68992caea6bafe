//! # Stats Commands

use chrono::{DateTime, Local};
use pos_core::{AggregatedStats, PeriodFilter};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Computes the dashboard for `period`, or the configured default period.
pub async fn get_stats(
    state: &AppState,
    period: Option<PeriodFilter>,
    now: DateTime<Local>,
) -> Result<AggregatedStats, ApiError> {
    let period = period.unwrap_or(state.config().default_period);
    debug!(%period, "get_stats command");

    let log = state.transactions().load().await?;
    Ok(state.engine().compute(&log, period, &now))
}
