//! # Statistics Engine
//!
//! Derives the dashboard view-model from the raw transaction log.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute(log, period, now)                                              │
//! │                                                                         │
//! │  1. Window      today / week ago / month ago / 365 days ago            │
//! │       │                                                                 │
//! │  2. Filter      period_transactions = log where date >= threshold      │
//! │       │                                                                 │
//! │  3. Scalars     all-time total (whole log!), period total, count       │
//! │       │                                                                 │
//! │  4. Grouping    by product NAME (qty, revenue), by category (revenue)  │
//! │       │                                                                 │
//! │  5. Trend       N daily buckets ending today (1 / 7 / 30 / 365)        │
//! │       │                                                                 │
//! │  6. Categories  bar + pie series with display labels                   │
//! │       │                                                                 │
//! │  7. Ranking     top 5 products by revenue (stable on ties)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Windows On Purpose
//! The inclusion threshold (step 1) and the trend range (step 5) are not the
//! same window. A monthly filter on March 31st includes sales back to
//! February 29th, but the trend only has 30 buckets, so the oldest day counts
//! toward `period_sales` and not toward the chart. Future-dated sales behave
//! the same way. Both windows must stay as they are.
//!
//! ## Name-Keyed Products
//! Product grouping uses `product_name`, not `product_id`: two catalog items
//! that share a name are reported as one product.

use chrono::{DateTime, Days, Months, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

use crate::catalog::category_label;
use crate::money::Money;
use crate::types::{PeriodFilter, Transaction};
use crate::TOP_PRODUCTS_LIMIT;

// =============================================================================
// View-Model Types
// =============================================================================

/// Quantity and revenue of one product name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductSales {
    pub name: String,
    pub quantity: i64,
    pub revenue: Money,
}

/// Revenue of one category key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategorySales {
    pub category: String,
    pub revenue: Money,
}

/// One day of the trend line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TrendPoint {
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Short day label, e.g. `"Mar 5"`.
    pub label: String,
    pub revenue: Money,
}

/// One slice/bar of a category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryPoint {
    /// Display name, see [`category_label`].
    pub label: String,
    pub revenue: Money,
}

/// Everything the dashboard renders, recomputed from scratch on each call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AggregatedStats {
    /// The filter these stats were computed for.
    pub period: PeriodFilter,

    /// Sum over the entire log, independent of `period`.
    pub total_sales_all_time: Money,

    pub period_sales: Money,

    pub period_transaction_count: usize,

    /// Per product name, first-seen order.
    pub sales_by_product: Vec<ProductSales>,

    /// Per category key, first-seen order.
    pub sales_by_category: Vec<CategorySales>,

    /// Daily revenue, oldest first, ending today.
    pub trend: Vec<TrendPoint>,

    pub category_bar: Vec<CategoryPoint>,

    /// Same content and order as `category_bar`.
    pub category_pie: Vec<CategoryPoint>,

    /// At most five products, highest revenue first.
    pub top_products: Vec<ProductSales>,
}

impl AggregatedStats {
    /// KPI heading for the active period ("Weekly", "All Time", ...).
    pub fn period_label(&self) -> &'static str {
        self.period.label()
    }
}

// =============================================================================
// Period Window
// =============================================================================

/// Inclusion thresholds derived from the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub today: NaiveDate,
    pub week_ago: NaiveDate,
    /// One calendar month back; the day clamps to the end of a shorter month.
    pub month_ago: NaiveDate,
    /// A fixed 365 days back, not the start of the calendar year.
    pub year_ago: NaiveDate,
}

impl PeriodWindow {
    pub fn new(today: NaiveDate) -> Self {
        PeriodWindow {
            today,
            week_ago: today.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN),
            month_ago: today
                .checked_sub_months(Months::new(1))
                .unwrap_or(NaiveDate::MIN),
            year_ago: today
                .checked_sub_days(Days::new(365))
                .unwrap_or(NaiveDate::MIN),
        }
    }

    /// Earliest included date, or `None` when nothing is filtered out.
    pub fn threshold(&self, period: PeriodFilter) -> Option<NaiveDate> {
        match period {
            PeriodFilter::Daily => Some(self.today),
            PeriodFilter::Weekly => Some(self.week_ago),
            PeriodFilter::Monthly => Some(self.month_ago),
            PeriodFilter::Yearly => Some(self.year_ago),
            PeriodFilter::All => None,
        }
    }

    pub fn includes(&self, period: PeriodFilter, date: NaiveDate) -> bool {
        self.threshold(period).map_or(true, |threshold| date >= threshold)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Stateless calculator for the dashboard statistics.
///
/// ## Usage
/// ```rust
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use pos_core::{PeriodFilter, StatsEngine};
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
/// let stats = StatsEngine::new().compute(&[], PeriodFilter::Weekly, &now);
///
/// assert!(stats.period_sales.is_zero());
/// assert_eq!(stats.trend.len(), 7);
/// assert_eq!(stats.trend[6].date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
/// assert_eq!(stats.trend[6].label, "Mar 15");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct StatsEngine {}

impl StatsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the full view-model.
    ///
    /// `now` is interpreted in its own time zone: the current day is
    /// `now.date_naive()`, so pass `Local::now()` for local-calendar days.
    /// Transaction dates are compared as whole days.
    pub fn compute<Tz: TimeZone>(
        &self,
        transactions: &[Transaction],
        period: PeriodFilter,
        now: &DateTime<Tz>,
    ) -> AggregatedStats {
        let window = PeriodWindow::new(now.date_naive());

        let period_transactions: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| window.includes(period, t.date))
            .collect();

        let total_sales_all_time: Money = transactions.iter().map(Transaction::total).sum();
        let period_sales: Money = period_transactions.iter().map(|t| t.total()).sum();

        let sales_by_product = group_by_product(&period_transactions);
        let sales_by_category = group_by_category(&period_transactions);

        let trend = trend_series(&period_transactions, window.today, period.trend_days());

        let category_bar: Vec<CategoryPoint> = sales_by_category
            .iter()
            .map(|c| CategoryPoint {
                label: category_label(&c.category).to_string(),
                revenue: c.revenue,
            })
            .collect();
        let category_pie = category_bar.clone();

        let top_products = rank_products(&sales_by_product, TOP_PRODUCTS_LIMIT);

        AggregatedStats {
            period,
            total_sales_all_time,
            period_sales,
            period_transaction_count: period_transactions.len(),
            sales_by_product,
            sales_by_category,
            trend,
            category_bar,
            category_pie,
            top_products,
        }
    }
}

// =============================================================================
// Steps
// =============================================================================

/// Groups by exact product name, keeping first-seen order.
fn group_by_product(transactions: &[&Transaction]) -> Vec<ProductSales> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ProductSales> = Vec::new();

    for tx in transactions {
        let slot = *index.entry(tx.product_name.as_str()).or_insert_with(|| {
            groups.push(ProductSales {
                name: tx.product_name.clone(),
                quantity: 0,
                revenue: Money::zero(),
            });
            groups.len() - 1
        });

        groups[slot].quantity += tx.quantity;
        groups[slot].revenue += tx.total();
    }

    groups
}

/// Groups by category key, keeping first-seen order.
fn group_by_category(transactions: &[&Transaction]) -> Vec<CategorySales> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<CategorySales> = Vec::new();

    for tx in transactions {
        let slot = *index.entry(tx.category.as_str()).or_insert_with(|| {
            groups.push(CategorySales {
                category: tx.category.clone(),
                revenue: Money::zero(),
            });
            groups.len() - 1
        });

        groups[slot].revenue += tx.total();
    }

    groups
}

/// `days` zero-initialised buckets ending at `today`; out-of-range dates are
/// dropped.
fn trend_series(transactions: &[&Transaction], today: NaiveDate, days: u32) -> Vec<TrendPoint> {
    let span = i64::from(days);
    let start = today
        .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
        .unwrap_or(today);

    let mut buckets = vec![Money::zero(); days as usize];
    for tx in transactions {
        let offset = (tx.date - start).num_days();
        if (0..span).contains(&offset) {
            buckets[offset as usize] += tx.total();
        }
    }

    start
        .iter_days()
        .zip(buckets)
        .map(|(date, revenue)| TrendPoint {
            date,
            label: date.format("%b %-d").to_string(),
            revenue,
        })
        .collect()
}

/// Highest revenue first; `sort_by` is stable so ties keep grouping order.
fn rank_products(groups: &[ProductSales], limit: usize) -> Vec<ProductSales> {
    let mut ranked = groups.to_vec();
    ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    ranked.truncate(limit);
    ranked
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn tx(id: i64, name: &str, category: &str, quantity: i64, price: i64, on: NaiveDate) -> Transaction {
        Transaction {
            id,
            product_id: id,
            product_name: name.to_string(),
            category: category.to_string(),
            quantity,
            unit_price_cents: price,
            total_cents: quantity * price,
            date: on,
            created_at: noon(2024, 1, 1),
        }
    }

    fn engine() -> StatsEngine {
        StatsEngine::new()
    }

    /// A log spread over the last year relative to 2024-03-15.
    fn sample_log() -> Vec<Transaction> {
        vec![
            tx(1, "Potato Chips", "snacks", 3, 2000, date(2024, 3, 15)),
            tx(2, "Shampoo", "consumer_products", 1, 12900, date(2024, 3, 14)),
            tx(3, "Potato Chips", "snacks", 2, 2000, date(2024, 3, 10)),
            tx(4, "Wireless Mouse", "small_it_gadgets", 1, 29900, date(2024, 2, 20)),
            tx(5, "A4 Notebook", "stationary", 5, 4500, date(2023, 12, 1)),
            tx(6, "Paracetamol", "simple_medicines", 2, 2500, date(2022, 6, 1)),
        ]
    }

    // -------------------------------------------------------------------------
    // Scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_log_daily() {
        let stats = engine().compute(&[], PeriodFilter::Daily, &noon(2024, 3, 15));

        assert!(stats.total_sales_all_time.is_zero());
        assert!(stats.period_sales.is_zero());
        assert_eq!(stats.period_transaction_count, 0);
        assert!(stats.sales_by_product.is_empty());
        assert!(stats.sales_by_category.is_empty());
        assert!(stats.category_bar.is_empty());
        assert!(stats.category_pie.is_empty());
        assert!(stats.top_products.is_empty());

        assert_eq!(stats.trend.len(), 1);
        assert_eq!(stats.trend[0].date, date(2024, 3, 15));
        assert!(stats.trend[0].revenue.is_zero());
    }

    #[test]
    fn test_single_sale_today() {
        let log = vec![tx(1, "Potato Chips", "snacks", 3, 1000, date(2024, 3, 15))];

        for period in [
            PeriodFilter::Daily,
            PeriodFilter::Weekly,
            PeriodFilter::Monthly,
            PeriodFilter::Yearly,
            PeriodFilter::All,
        ] {
            let stats = engine().compute(&log, period, &noon(2024, 3, 15));
            assert_eq!(stats.period_sales.cents(), 3000, "{:?}", period);
            assert_eq!(stats.total_sales_all_time.cents(), 3000);
            assert_eq!(stats.trend.last().unwrap().revenue.cents(), 3000);
        }
    }

    #[test]
    fn test_same_name_different_category() {
        let today = date(2024, 3, 15);
        let log = vec![
            tx(1, "Gift Box", "snacks", 2, 1000, today),
            tx(2, "Gift Box", "consumer_products", 1, 5000, today),
        ];

        let stats = engine().compute(&log, PeriodFilter::Daily, &noon(2024, 3, 15));

        assert_eq!(stats.sales_by_product.len(), 1);
        assert_eq!(stats.sales_by_product[0].name, "Gift Box");
        assert_eq!(stats.sales_by_product[0].quantity, 3);
        assert_eq!(stats.sales_by_product[0].revenue.cents(), 7000);

        assert_eq!(stats.sales_by_category.len(), 2);
        assert_eq!(stats.sales_by_category[0].category, "snacks");
        assert_eq!(stats.sales_by_category[0].revenue.cents(), 2000);
        assert_eq!(stats.sales_by_category[1].category, "consumer_products");
        assert_eq!(stats.sales_by_category[1].revenue.cents(), 5000);
    }

    #[test]
    fn test_forty_day_old_sale_monthly() {
        let now = noon(2024, 3, 15);
        let old = date(2024, 2, 4); // 40 days before 2024-03-15
        assert_eq!((date(2024, 3, 15) - old).num_days(), 40);

        let log = vec![tx(1, "Shampoo", "consumer_products", 1, 12900, old)];
        let stats = engine().compute(&log, PeriodFilter::Monthly, &now);

        assert_eq!(stats.total_sales_all_time.cents(), 12900);
        assert!(stats.period_sales.is_zero());
        assert_eq!(stats.period_transaction_count, 0);
        assert_eq!(stats.trend.len(), 30);
        assert!(stats.trend.iter().all(|p| p.revenue.is_zero()));
    }

    // -------------------------------------------------------------------------
    // Windows
    // -------------------------------------------------------------------------

    #[test]
    fn test_period_thresholds() {
        let window = PeriodWindow::new(date(2024, 3, 15));

        assert_eq!(window.threshold(PeriodFilter::Daily), Some(date(2024, 3, 15)));
        assert_eq!(window.threshold(PeriodFilter::Weekly), Some(date(2024, 3, 8)));
        assert_eq!(window.threshold(PeriodFilter::Monthly), Some(date(2024, 2, 15)));
        assert_eq!(window.threshold(PeriodFilter::Yearly), Some(date(2023, 3, 16)));
        assert_eq!(window.threshold(PeriodFilter::All), None);
    }

    #[test]
    fn test_month_ago_clamps_to_month_end() {
        assert_eq!(PeriodWindow::new(date(2024, 3, 31)).month_ago, date(2024, 2, 29));
        assert_eq!(PeriodWindow::new(date(2023, 3, 31)).month_ago, date(2023, 2, 28));
        assert_eq!(PeriodWindow::new(date(2024, 1, 10)).month_ago, date(2023, 12, 10));
    }

    #[test]
    fn test_yearly_is_365_days_not_calendar_year() {
        let now = noon(2024, 3, 15);
        let log = vec![
            tx(1, "Notebook", "stationary", 1, 4500, date(2023, 12, 1)),
            tx(2, "Notebook", "stationary", 1, 4500, date(2023, 3, 16)),
            tx(3, "Notebook", "stationary", 1, 4500, date(2023, 3, 15)),
        ];

        let stats = engine().compute(&log, PeriodFilter::Yearly, &now);
        assert_eq!(stats.period_transaction_count, 2);
        assert_eq!(stats.period_sales.cents(), 9000);

        // 2023-03-16 is in period but one day before the first of 365 buckets
        assert_eq!(stats.trend.len(), 365);
        assert_eq!(stats.trend.first().unwrap().date, date(2023, 3, 17));
        assert!(stats.trend.iter().all(|p| p.date != date(2023, 3, 16)));
        let trend_total: Money = stats.trend.iter().map(|p| p.revenue).sum();
        assert_eq!(trend_total.cents(), 4500);
    }

    #[test]
    fn test_weekly_boundary_is_inclusive() {
        let now = noon(2024, 3, 15);
        let log = vec![
            tx(1, "Pen", "stationary", 1, 1500, date(2024, 3, 8)),
            tx(2, "Pen", "stationary", 1, 1500, date(2024, 3, 7)),
        ];

        let stats = engine().compute(&log, PeriodFilter::Weekly, &now);
        assert_eq!(stats.period_transaction_count, 1);
        // 2024-03-08 is in period but outside the 7 trend buckets (03-09..03-15)
        assert_eq!(stats.trend.first().unwrap().date, date(2024, 3, 9));
        assert!(stats.trend.iter().all(|p| p.revenue.is_zero()));
    }

    #[test]
    fn test_monthly_threshold_wider_than_trend() {
        // 2024-03-31: month_ago = 02-29, trend covers 03-02..03-31
        let now = noon(2024, 3, 31);
        let log = vec![tx(1, "Pen", "stationary", 2, 1500, date(2024, 3, 1))];

        let stats = engine().compute(&log, PeriodFilter::Monthly, &now);
        assert_eq!(stats.period_sales.cents(), 3000);
        assert_eq!(stats.period_transaction_count, 1);

        let trend_total: Money = stats.trend.iter().map(|p| p.revenue).sum();
        assert!(trend_total.is_zero());
        assert_eq!(stats.trend.first().unwrap().date, date(2024, 3, 2));
    }

    #[test]
    fn test_future_dated_sale_counts_but_not_charted() {
        let now = noon(2024, 3, 15);
        let log = vec![tx(1, "Pen", "stationary", 1, 1500, date(2024, 3, 20))];

        let stats = engine().compute(&log, PeriodFilter::Daily, &now);
        assert_eq!(stats.period_sales.cents(), 1500);
        assert!(stats.trend[0].revenue.is_zero());
    }

    #[test]
    fn test_all_includes_everything() {
        let log = sample_log();
        let stats = engine().compute(&log, PeriodFilter::All, &noon(2024, 3, 15));

        assert_eq!(stats.period_transaction_count, log.len());
        assert_eq!(stats.period_sales, stats.total_sales_all_time);
        assert_eq!(stats.trend.len(), 30);
        assert_eq!(stats.period_label(), "All Time");
    }

    #[test]
    fn test_today_follows_time_zone_of_now() {
        // 2024-03-15 20:00 UTC is already 2024-03-16 in UTC+7
        let bangkok = FixedOffset::east_opt(7 * 3600).unwrap();
        let now = bangkok.with_ymd_and_hms(2024, 3, 16, 3, 0, 0).unwrap();

        let log = vec![
            tx(1, "Pen", "stationary", 1, 1500, date(2024, 3, 15)),
            tx(2, "Pen", "stationary", 1, 1500, date(2024, 3, 16)),
        ];

        let stats = engine().compute(&log, PeriodFilter::Daily, &now);
        assert_eq!(stats.period_transaction_count, 1);
        assert_eq!(stats.trend[0].date, date(2024, 3, 16));
        assert_eq!(stats.trend[0].label, "Mar 16");
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    #[test]
    fn test_all_time_total_ignores_filter() {
        let log = sample_log();
        let now = noon(2024, 3, 15);
        let expected: i64 = log.iter().map(|t| t.total_cents).sum();

        for period in [
            PeriodFilter::Daily,
            PeriodFilter::Weekly,
            PeriodFilter::Monthly,
            PeriodFilter::Yearly,
            PeriodFilter::All,
        ] {
            let stats = engine().compute(&log, period, &now);
            assert_eq!(stats.total_sales_all_time.cents(), expected);
        }
    }

    #[test]
    fn test_period_scalars_match_filtered_log() {
        let log = sample_log();
        let now = noon(2024, 3, 15);
        let window = PeriodWindow::new(date(2024, 3, 15));

        for period in PeriodFilter::SELECTABLE {
            let included: Vec<&Transaction> =
                log.iter().filter(|t| window.includes(period, t.date)).collect();
            let stats = engine().compute(&log, period, &now);

            assert_eq!(stats.period_transaction_count, included.len());
            assert_eq!(
                stats.period_sales.cents(),
                included.iter().map(|t| t.total_cents).sum::<i64>()
            );
        }

        let counts: Vec<usize> = PeriodFilter::SELECTABLE
            .iter()
            .map(|p| engine().compute(&log, *p, &now).period_transaction_count)
            .collect();
        assert_eq!(counts, vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_trend_shape_for_every_filter() {
        let log = sample_log();
        let now = noon(2024, 3, 15);

        for period in PeriodFilter::SELECTABLE {
            let stats = engine().compute(&log, period, &now);
            let n = period.trend_days() as usize;

            assert_eq!(stats.trend.len(), n);
            assert_eq!(stats.trend.last().unwrap().date, date(2024, 3, 15));
            assert!(stats
                .trend
                .windows(2)
                .all(|w| (w[1].date - w[0].date).num_days() == 1));
            assert!(stats.trend.iter().all(|p| !p.label.is_empty()));
        }
    }

    #[test]
    fn test_weekly_trend_buckets() {
        let stats = engine().compute(&sample_log(), PeriodFilter::Weekly, &noon(2024, 3, 15));

        let labels: Vec<&str> = stats.trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Mar 9", "Mar 10", "Mar 11", "Mar 12", "Mar 13", "Mar 14", "Mar 15"]
        );

        let revenue: Vec<i64> = stats.trend.iter().map(|p| p.revenue.cents()).collect();
        assert_eq!(revenue, vec![0, 4000, 0, 0, 0, 12900, 6000]);
    }

    #[test]
    fn test_top_products_sorted_and_capped() {
        let today = date(2024, 3, 15);
        let log: Vec<Transaction> = (1..=8)
            .map(|i| tx(i, &format!("Item {}", i), "snacks", 1, i * 100, today))
            .collect();

        let stats = engine().compute(&log, PeriodFilter::Daily, &noon(2024, 3, 15));

        assert_eq!(stats.sales_by_product.len(), 8);
        assert_eq!(stats.top_products.len(), TOP_PRODUCTS_LIMIT);
        let names: Vec<&str> = stats.top_products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Item 8", "Item 7", "Item 6", "Item 5", "Item 4"]);
        assert!(stats
            .top_products
            .windows(2)
            .all(|w| w[0].revenue >= w[1].revenue));
        assert!(stats
            .top_products
            .iter()
            .all(|p| stats.sales_by_product.contains(p)));
    }

    #[test]
    fn test_ranking_ties_keep_first_seen_order() {
        let today = date(2024, 3, 15);
        let log = vec![
            tx(1, "Chips", "snacks", 1, 500, today),
            tx(2, "Water", "snacks", 1, 500, today),
            tx(3, "Mouse", "small_it_gadgets", 1, 900, today),
            tx(4, "Candy", "snacks", 1, 500, today),
        ];

        let stats = engine().compute(&log, PeriodFilter::Daily, &noon(2024, 3, 15));
        let names: Vec<&str> = stats.top_products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mouse", "Chips", "Water", "Candy"]);
    }

    #[test]
    fn test_category_series_use_display_labels() {
        let today = date(2024, 3, 15);
        let log = vec![
            tx(1, "Mouse", "small_it_gadgets", 1, 29900, today),
            tx(2, "Seeds", "garden", 1, 3000, today),
            tx(3, "Cable", "small_it_gadgets", 1, 15900, today),
        ];

        let stats = engine().compute(&log, PeriodFilter::Daily, &noon(2024, 3, 15));

        let bar: Vec<(&str, i64)> = stats
            .category_bar
            .iter()
            .map(|c| (c.label.as_str(), c.revenue.cents()))
            .collect();
        assert_eq!(bar, vec![("IT Gadgets", 45800), ("garden", 3000)]);
        assert_eq!(stats.category_pie, stats.category_bar);
    }

    #[test]
    fn test_grouping_only_covers_period() {
        let stats = engine().compute(&sample_log(), PeriodFilter::Daily, &noon(2024, 3, 15));

        assert_eq!(stats.sales_by_product.len(), 1);
        assert_eq!(stats.sales_by_product[0].name, "Potato Chips");
        assert_eq!(stats.sales_by_product[0].quantity, 3);
        assert_eq!(stats.sales_by_category.len(), 1);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let log = sample_log();
        let now = noon(2024, 3, 15);

        let first = engine().compute(&log, PeriodFilter::Monthly, &now);
        let second = engine().compute(&log, PeriodFilter::Monthly, &now);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_unvalidated_input_is_not_rejected() {
        let today = date(2024, 3, 15);
        let log = vec![
            tx(1, "Refund", "snacks", -1, 2000, today),
            tx(2, "Free", "snacks", 0, 2000, today),
        ];

        let stats = engine().compute(&log, PeriodFilter::Daily, &noon(2024, 3, 15));
        assert_eq!(stats.period_sales.cents(), -2000);
        assert_eq!(stats.period_transaction_count, 2);
    }

    #[test]
    fn test_json_shape() {
        let stats = engine().compute(&sample_log(), PeriodFilter::Weekly, &noon(2024, 3, 15));
        let value = serde_json::to_value(&stats).unwrap();

        assert_eq!(value["period"], "weekly");
        assert_eq!(value["periodSales"], 22900);
        assert_eq!(value["periodTransactionCount"], 3);
        assert_eq!(value["topProducts"][0]["name"], "Shampoo");
        assert_eq!(value["trend"][6]["label"], "Mar 15");
    }
}
