//! # Sale Commands

use chrono::{DateTime, Local, NaiveDate, Utc};
use pos_core::journal::preview_total;
use pos_core::validation::{validate_product_id, validate_quantity};
use pos_core::{AggregatedStats, Money, PeriodFilter, Product, SaleEntry, Transaction};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSaleResponse {
    pub transaction: Transaction,
    /// Daily statistics recomputed from the updated log.
    pub stats: AggregatedStats,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePreview {
    pub product: Product,
    pub quantity: i64,
    pub total: Money,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSaleResponse {
    pub removed: Transaction,
    pub remaining: usize,
    pub stats: AggregatedStats,
}

/// Records a sale and returns it with the refreshed daily statistics.
///
/// `date` defaults to the local calendar day of `now`.
pub async fn record_sale(
    state: &AppState,
    product_id: i64,
    quantity: i64,
    date: Option<NaiveDate>,
    now: DateTime<Local>,
) -> Result<RecordSaleResponse, ApiError> {
    debug!(product_id, quantity, ?date, "record_sale command");

    let store = state.transactions();
    let log = store.load().await?;

    let entry = SaleEntry {
        product_id,
        quantity,
        date: date.unwrap_or_else(|| now.date_naive()),
    };
    let transaction = entry.into_transaction(state.catalog(), &log, now.with_timezone(&Utc))?;

    let log = store.append(transaction.clone()).await?;
    let stats = state.engine().compute(&log, PeriodFilter::Daily, &now);

    info!(
        id = transaction.id,
        total_cents = transaction.total_cents,
        "Sale recorded"
    );

    Ok(RecordSaleResponse { transaction, stats })
}

/// Shows what a sale would cost without recording it.
pub fn preview_sale(
    state: &AppState,
    product_id: i64,
    quantity: i64,
) -> Result<SalePreview, ApiError> {
    debug!(product_id, quantity, "preview_sale command");

    validate_product_id(product_id).map_err(|e| ApiError::validation(e.to_string()))?;
    validate_quantity(quantity).map_err(|e| ApiError::validation(e.to_string()))?;
    let product = state.catalog().require(product_id)?.clone();

    Ok(SalePreview {
        total: preview_total(state.catalog(), product_id, quantity),
        product,
        quantity,
    })
}

/// Looks up a recorded sale, e.g. to show it before confirming a delete.
pub async fn get_sale(state: &AppState, id: i64) -> Result<Transaction, ApiError> {
    debug!(id, "get_sale command");

    state
        .transactions()
        .load()
        .await?
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| ApiError::not_found("Transaction", &id.to_string()))
}

/// Deletes a sale and recomputes statistics for `period`.
pub async fn delete_sale(
    state: &AppState,
    id: i64,
    period: PeriodFilter,
    now: DateTime<Local>,
) -> Result<DeleteSaleResponse, ApiError> {
    debug!(id, "delete_sale command");

    let removed = get_sale(state, id).await?;
    let log = state.transactions().remove(id).await?;
    let stats = state.engine().compute(&log, period, &now);

    Ok(DeleteSaleResponse {
        removed,
        remaining: log.len(),
        stats,
    })
}

/// The journal, newest first.
pub async fn list_sales(state: &AppState) -> Result<Vec<Transaction>, ApiError> {
    debug!("list_sales command");
    Ok(state.transactions().load().await?)
}

/// Asks a yes/no question; only `y` or `yes` (any case) confirms.
pub fn confirm(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "{} [y/N] ", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::test_support::test_state;
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[tokio::test]
    async fn test_record_defaults_to_today_and_refreshes_daily_stats() {
        let state = test_state().await;

        let response = record_sale(&state, 1, 3, None, now()).await.unwrap();
        assert_eq!(response.transaction.date, day(15));
        assert_eq!(response.transaction.product_name, "Potato Chips");
        assert_eq!(response.transaction.total_cents, 6000);

        assert_eq!(response.stats.period, PeriodFilter::Daily);
        assert_eq!(response.stats.period_sales.cents(), 6000);
        assert_eq!(response.stats.period_transaction_count, 1);
    }

    #[tokio::test]
    async fn test_record_back_dated_sale() {
        let state = test_state().await;
        record_sale(&state, 1, 1, None, now()).await.unwrap();

        let response = record_sale(&state, 2, 1, Some(day(10)), now()).await.unwrap();
        assert_eq!(response.transaction.date, day(10));
        // Not today, so only the all-time total moves
        assert_eq!(response.stats.period_sales.cents(), 2000);
        assert_eq!(response.stats.total_sales_all_time.cents(), 2000 + 12900);

        let journal = list_sales(&state).await.unwrap();
        assert_eq!(journal.len(), 2);
        assert_eq!(journal[0].id, response.transaction.id);
    }

    #[tokio::test]
    async fn test_record_rejects_bad_input() {
        let state = test_state().await;

        let err = record_sale(&state, 9, 1, None, now()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = record_sale(&state, 1, 0, None, now()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(list_sales(&state).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_preview_does_not_record() {
        let state = test_state().await;

        let preview = preview_sale(&state, 3, 2).unwrap();
        assert_eq!(preview.product.name, "Wireless Mouse");
        assert_eq!(preview.total.cents(), 59900);
        assert!(list_sales(&state).await.unwrap().is_empty());

        assert_eq!(
            preview_sale(&state, 3, 1000).unwrap_err().code,
            ErrorCode::ValidationError
        );
    }

    #[tokio::test]
    async fn test_delete_sale() {
        let state = test_state().await;
        let first = record_sale(&state, 1, 1, None, now()).await.unwrap().transaction;
        let second = record_sale(&state, 2, 1, None, now()).await.unwrap().transaction;

        let response = delete_sale(&state, first.id, PeriodFilter::Daily, now())
            .await
            .unwrap();
        assert_eq!(response.removed, first);
        assert_eq!(response.remaining, 1);
        assert_eq!(response.stats.period_sales, second.total());

        let err = delete_sale(&state, first.id, PeriodFilter::Daily, now())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_confirm() {
        let mut out = Vec::new();
        assert!(confirm("Delete?", &mut "y\n".as_bytes(), &mut out).unwrap());
        assert!(confirm("Delete?", &mut " YES \n".as_bytes(), &mut out).unwrap());
        assert!(!confirm("Delete?", &mut "\n".as_bytes(), &mut out).unwrap());
        assert!(!confirm("Delete?", &mut "nope\n".as_bytes(), &mut out).unwrap());
        assert!(!confirm("Delete?", &mut "".as_bytes(), &mut out).unwrap());

        assert!(String::from_utf8(out).unwrap().starts_with("Delete? [y/N] "));
    }
}
