//! Command line definition.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use pos_core::validation::parse_sale_date;
use pos_core::PeriodFilter;
use std::path::PathBuf;

/// Record point-of-sale transactions and review sales statistics.
#[derive(Debug, Parser)]
#[command(name = "pos-dashboard", author, version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides POS_DB_PATH and the platform data directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the products that can be sold.
    Catalog,

    /// Record a new sale.
    Record(RecordArgs),

    /// Delete a recorded sale.
    Delete(DeleteArgs),

    /// List recorded sales, newest first.
    Journal,

    /// Show the dashboard statistics.
    Stats(StatsArgs),

    /// Fill an empty journal with demo sales.
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Catalog id of the product (see `catalog`).
    #[arg(long)]
    pub product: i64,

    /// Units sold.
    #[arg(long)]
    pub quantity: i64,

    /// Sale date (format: YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// Show the total without recording the sale.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Transaction id (see `journal`).
    pub id: i64,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// daily, weekly, monthly, yearly or all (anything else means all).
    #[arg(short, long, value_parser = parse_period_arg)]
    pub period: Option<PeriodFilter>,

    /// Print the statistics as JSON instead of tables.
    #[arg(long)]
    pub json: bool,

    /// Show every trend day, including days without sales.
    #[arg(long)]
    pub full_trend: bool,
}

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Number of days of history to generate, ending today.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=365))]
    pub days: u32,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_sale_date(value).map_err(|e| e.to_string())
}

fn parse_period_arg(value: &str) -> Result<PeriodFilter, String> {
    Ok(PeriodFilter::parse_lenient(value))
}
