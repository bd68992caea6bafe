//! # Seed Command
//!
//! Fills an empty journal with demo sales so the dashboard has something to
//! show. The generated sales depend only on the catalog, the day count and
//! today's date.

use chrono::{DateTime, Days, Local, Utc};
use pos_core::journal::prepend_to_log;
use pos_core::{SaleEntry, Transaction};
use tracing::{debug, info};

use crate::error::{ApiError, ErrorCode};
use crate::state::AppState;

/// Generates `days` days of sales ending today and stores them.
///
/// Returns the number of transactions written.
///
/// ## Errors
/// - [`ErrorCode::BusinessLogic`] if the journal already has sales
pub async fn seed_demo_sales(
    state: &AppState,
    days: u32,
    now: DateTime<Local>,
) -> Result<usize, ApiError> {
    debug!(days, "seed_demo_sales command");

    let store = state.transactions();
    if !store.load().await?.is_empty() {
        return Err(ApiError::new(
            ErrorCode::BusinessLogic,
            "The journal already has sales; seeding only fills an empty journal",
        ));
    }

    let log = demo_log(state, days, now)?;
    store.save(&log).await?;

    info!(count = log.len(), days, "Demo sales written");
    Ok(log.len())
}

/// Oldest day first, so the finished log is newest first like a real one.
fn demo_log(state: &AppState, days: u32, now: DateTime<Local>) -> Result<Vec<Transaction>, ApiError> {
    let catalog = state.catalog();
    if catalog.is_empty() {
        return Ok(Vec::new());
    }

    let product_count = catalog.len() as u64;
    let today = now.date_naive();
    let created_at = now.with_timezone(&Utc);
    let mut log: Vec<Transaction> = Vec::new();

    for offset in (0..u64::from(days)).rev() {
        let Some(date) = today.checked_sub_days(Days::new(offset)) else {
            continue;
        };

        for slot in 0..=(offset % 3) {
            let entry = SaleEntry {
                product_id: ((offset * 7 + slot * 3) % product_count) as i64 + 1,
                quantity: ((offset + slot) % 5) as i64 + 1,
                date,
            };
            let transaction = entry.into_transaction(catalog, &log, created_at)?;
            log = prepend_to_log(&log, transaction);
        }
    }

    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sale::record_sale;
    use crate::state::test_support::test_state;
    use chrono::{NaiveDate, TimeZone};

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_seed_fills_empty_journal() {
        let state = test_state().await;

        let written = seed_demo_sales(&state, 7, now()).await.unwrap();
        // offsets 0..7 contribute 1, 2, 3, 1, 2, 3, 1 sales
        assert_eq!(written, 13);

        let log = state.transactions().load().await.unwrap();
        assert_eq!(log.len(), 13);
        assert_eq!(log[0].date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(
            log.last().unwrap().date,
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );

        let mut ids: Vec<i64> = log.iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 13);
        assert!(log.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[tokio::test]
    async fn test_seed_is_deterministic() {
        let a = test_state().await;
        let b = test_state().await;
        seed_demo_sales(&a, 30, now()).await.unwrap();
        seed_demo_sales(&b, 30, now()).await.unwrap();

        let log_a = a.transactions().load().await.unwrap();
        let log_b = b.transactions().load().await.unwrap();
        assert_eq!(log_a, log_b);
    }

    #[tokio::test]
    async fn test_seed_refuses_non_empty_journal() {
        let state = test_state().await;
        record_sale(&state, 1, 1, None, now()).await.unwrap();

        let err = seed_demo_sales(&state, 7, now()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert_eq!(state.transactions().load().await.unwrap().len(), 1);
    }
}
