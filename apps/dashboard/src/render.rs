//! # Terminal Rendering
//!
//! Turns command results into text: KPI cards, the trend, the category bar
//! and pie series, the ranked product list and the journal.
//!
//! ## Dashboard Layout
//! ```text
//! Weekly Dashboard
//! ╭──────────────────────────┬───────────╮
//! │ Total Sales (All Time)   │ ฿1,520.00 │   ◄── KPI cards
//! │ Weekly Sales             │   ฿229.00 │
//! │ Weekly Transactions      │         3 │
//! ╰──────────────────────────┴───────────╯
//! Sales Trend                                ◄── one row per day
//! Sales by Category                          ◄── bar + pie share
//! Top Products                               ◄── at most five
//! ```
//!
//! Every function returns a `String`; nothing here prints.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use pos_core::{category_label, AggregatedStats, Money, Product, Transaction};

use crate::commands::sale::SalePreview;

/// Width of the longest bar in the category chart.
const BAR_WIDTH: i64 = 24;

/// Trends longer than this hide days without sales unless asked not to.
const COMPACT_TREND_DAYS: usize = 7;

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

fn amount(value: Money, symbol: &str) -> Cell {
    Cell::new(value.format_with_symbol(symbol)).set_alignment(CellAlignment::Right)
}

fn number(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

// =============================================================================
// Catalog & Journal
// =============================================================================

pub fn catalog(products: &[Product], symbol: &str) -> String {
    let mut table = new_table(&["ID", "Product", "Category", "Price", "Inventory"]);
    for product in products {
        table.add_row(vec![
            number(product.id),
            Cell::new(&product.name),
            Cell::new(category_label(&product.category)),
            amount(product.unit_price(), symbol),
            number(product.inventory),
        ]);
    }
    table.to_string()
}

pub fn journal(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No sales recorded yet.".to_string();
    }

    let mut table = new_table(&["ID", "Date", "Product", "Category", "Qty", "Unit Price", "Total"]);
    for tx in transactions {
        table.add_row(vec![
            Cell::new(tx.id),
            Cell::new(tx.date),
            Cell::new(&tx.product_name),
            Cell::new(category_label(&tx.category)),
            number(tx.quantity),
            amount(tx.unit_price(), symbol),
            amount(tx.total(), symbol),
        ]);
    }

    let total: Money = transactions.iter().map(Transaction::total).sum();
    format!(
        "{}\n{} sales, {} in total",
        table,
        transactions.len(),
        total.format_with_symbol(symbol)
    )
}

/// One-line description of a single sale.
pub fn transaction_line(tx: &Transaction, symbol: &str) -> String {
    format!(
        "#{} {} × {} @ {} = {} on {}",
        tx.id,
        tx.quantity,
        tx.product_name,
        tx.unit_price().format_with_symbol(symbol),
        tx.total().format_with_symbol(symbol),
        tx.date
    )
}

pub fn preview(preview: &SalePreview, symbol: &str) -> String {
    format!(
        "{} × {} @ {} = {} (not recorded)",
        preview.quantity,
        preview.product.name,
        preview.product.unit_price().format_with_symbol(symbol),
        preview.total.format_with_symbol(symbol)
    )
}

// =============================================================================
// Dashboard
// =============================================================================

/// The full dashboard: KPI cards, trend, categories, top products.
pub fn dashboard(stats: &AggregatedStats, symbol: &str, full_trend: bool) -> String {
    [
        format!("{} Dashboard", stats.period_label()),
        kpi_cards(stats, symbol),
        "Sales Trend".to_string(),
        trend(stats, symbol, full_trend),
        "Sales by Category".to_string(),
        categories(stats, symbol),
        "Top Products".to_string(),
        top_products(stats, symbol),
    ]
    .join("\n")
}

pub fn kpi_cards(stats: &AggregatedStats, symbol: &str) -> String {
    let label = stats.period_label();
    let mut table = new_table(&["Metric", "Value"]);
    table
        .add_row(vec![
            Cell::new("Total Sales (All Time)"),
            amount(stats.total_sales_all_time, symbol),
        ])
        .add_row(vec![
            Cell::new(format!("{} Sales", label)),
            amount(stats.period_sales, symbol),
        ])
        .add_row(vec![
            Cell::new(format!("{} Transactions", label)),
            number(stats.period_transaction_count),
        ]);
    table.to_string()
}

/// Daily revenue, oldest first.
///
/// Long trends (monthly, yearly, all) list only days with sales unless
/// `full` is set.
pub fn trend(stats: &AggregatedStats, symbol: &str, full: bool) -> String {
    let compact = !full && stats.trend.len() > COMPACT_TREND_DAYS;

    let mut table = new_table(&["Day", "Date", "Revenue"]);
    let mut hidden = 0;
    for point in &stats.trend {
        if compact && point.revenue.is_zero() {
            hidden += 1;
            continue;
        }
        table.add_row(vec![
            Cell::new(&point.label),
            Cell::new(point.date),
            amount(point.revenue, symbol),
        ]);
    }

    if hidden == 0 {
        table.to_string()
    } else {
        format!(
            "{}\n{} of {} days without sales hidden (use --full-trend)",
            table,
            hidden,
            stats.trend.len()
        )
    }
}

/// Category bar and pie series side by side.
pub fn categories(stats: &AggregatedStats, symbol: &str) -> String {
    if stats.category_bar.is_empty() {
        return "No sales in this period.".to_string();
    }

    let max = stats
        .category_bar
        .iter()
        .map(|c| c.revenue.cents())
        .max()
        .unwrap_or(0);
    let pie_total: i64 = stats.category_pie.iter().map(|c| c.revenue.cents()).sum();

    let mut table = new_table(&["Category", "Revenue", "", "Share"]);
    for (bar, slice) in stats.category_bar.iter().zip(&stats.category_pie) {
        table.add_row(vec![
            Cell::new(&bar.label),
            amount(bar.revenue, symbol),
            Cell::new(bar_glyphs(bar.revenue.cents(), max)),
            Cell::new(share(slice.revenue.cents(), pie_total)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.to_string()
}

pub fn top_products(stats: &AggregatedStats, symbol: &str) -> String {
    if stats.top_products.is_empty() {
        return "No sales in this period.".to_string();
    }

    let mut table = new_table(&["#", "Product", "Qty", "Revenue"]);
    for (rank, product) in stats.top_products.iter().enumerate() {
        table.add_row(vec![
            number(rank + 1),
            Cell::new(&product.name),
            number(product.quantity),
            amount(product.revenue, symbol),
        ]);
    }
    table.to_string()
}

/// Bar proportional to `value / max`, at least one glyph for any sale.
fn bar_glyphs(value: i64, max: i64) -> String {
    if value <= 0 || max <= 0 {
        return String::new();
    }
    let width = (value * BAR_WIDTH / max).max(1);
    "█".repeat(width as usize)
}

/// Percentage with one decimal, `-` when the total is not positive.
fn share(value: i64, total: i64) -> String {
    if total <= 0 {
        return "-".to_string();
    }
    let tenths = (value * 1000 + total / 2) / total;
    format!("{}.{}%", tenths / 10, (tenths % 10).abs())
}
