//! # POS Dashboard Entry Point
//!
//! ```text
//! pos-dashboard catalog
//! pos-dashboard record --product 3 --quantity 2 [--date 2024-03-15] [--dry-run]
//! pos-dashboard delete <id> [--yes]
//! pos-dashboard journal
//! pos-dashboard stats [--period weekly] [--json] [--full-trend]
//! pos-dashboard seed [--days 30]
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use clap::Parser;
use pos_dashboard::cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    pos_dashboard::init_tracing();

    match pos_dashboard::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e.message);
            ExitCode::FAILURE
        }
    }
}
