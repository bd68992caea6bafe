//! # POS Dashboard Library
//!
//! Core library for the dashboard binary: wiring, command dispatch and
//! logging setup.
//!
//! ## Module Organization
//! ```text
//! pos_dashboard/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap definitions
//! ├── config.rs       ◄─── AppConfig (defaults + POS_* env)
//! ├── state.rs        ◄─── AppState (database, catalog, config)
//! ├── commands/
//! │   ├── catalog.rs  ◄─── Product listing
//! │   ├── sale.rs     ◄─── Record / preview / delete / journal
//! │   ├── stats.rs    ◄─── Dashboard statistics
//! │   └── seed.rs     ◄─── Demo data
//! ├── render.rs       ◄─── comfy-table output
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod state;

use chrono::Local;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, DeleteArgs, RecordArgs, StatsArgs};
use config::AppConfig;
use error::ApiError;
use state::AppState;

/// Runs one dashboard invocation.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Invocation                                        │
/// │                                                                         │
/// │  1. Resolve Configuration ────────────────────────────────────────────► │
/// │     • defaults, then POS_* environment, then --db                       │
/// │                                                                         │
/// │  2. Open Database ────────────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • built-in dataset or POS_CATALOG_PATH                              │
/// │                                                                         │
/// │  4. Execute Command ──────────────────────────────────────────────────► │
/// │     • at most one mutation, then one recompute                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<(), ApiError> {
    info!("Starting POS dashboard");

    let config = AppConfig::from_env().with_database_path(cli.db);
    let state = AppState::open(config).await?;

    let result = execute(&state, cli.command).await;
    state.db().close().await;
    result
}

/// Executes a parsed command and prints its result to stdout.
pub async fn execute(state: &AppState, command: Command) -> Result<(), ApiError> {
    let now = Local::now();
    let symbol = state.currency();
    let mut stdout = io::stdout();

    match command {
        Command::Catalog => {
            let products = commands::catalog::list_products(state);
            writeln!(stdout, "{}", render::catalog(products, symbol))?;
        }

        Command::Record(args) if args.dry_run => {
            let preview = commands::sale::preview_sale(state, args.product, args.quantity)?;
            writeln!(stdout, "{}", render::preview(&preview, symbol))?;
        }

        Command::Record(RecordArgs {
            product,
            quantity,
            date,
            ..
        }) => {
            let response = commands::sale::record_sale(state, product, quantity, date, now).await?;
            writeln!(
                stdout,
                "Recorded {}\n",
                render::transaction_line(&response.transaction, symbol)
            )?;
            writeln!(stdout, "{}", render::dashboard(&response.stats, symbol, false))?;
        }

        Command::Delete(DeleteArgs { id, yes }) => {
            let sale = commands::sale::get_sale(state, id).await?;
            if !yes {
                let prompt = format!("Delete {}?", render::transaction_line(&sale, symbol));
                let confirmed =
                    commands::sale::confirm(&prompt, &mut io::stdin().lock(), &mut stdout)?;
                if !confirmed {
                    writeln!(stdout, "Cancelled.")?;
                    return Ok(());
                }
            }

            let period = state.config().default_period;
            let response = commands::sale::delete_sale(state, id, period, now).await?;
            writeln!(
                stdout,
                "Deleted {} ({} sales left)\n",
                render::transaction_line(&response.removed, symbol),
                response.remaining
            )?;
            writeln!(stdout, "{}", render::kpi_cards(&response.stats, symbol))?;
        }

        Command::Journal => {
            let log = commands::sale::list_sales(state).await?;
            writeln!(stdout, "{}", render::journal(&log, symbol))?;
        }

        Command::Stats(StatsArgs {
            period,
            json,
            full_trend,
        }) => {
            let stats = commands::stats::get_stats(state, period, now).await?;
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&stats)?)?;
            } else {
                writeln!(stdout, "{}", render::dashboard(&stats, symbol, full_trend))?;
            }
        }

        Command::Seed(args) => {
            let written = commands::seed::seed_demo_sales(state, args.days, now).await?;
            writeln!(
                stdout,
                "Seeded {} demo sales over {} days.",
                written, args.days
            )?;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays clean for tables and `--json`.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pos_db=trace` - Show trace for the storage crate only
/// - Default: INFO for the `pos_*` crates, WARN for everything else
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,pos=info,sqlx=warn")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
