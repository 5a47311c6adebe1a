//! # otd CLI entry point
//!
//! Parses command-line arguments, selects the rate table, and dispatches
//! to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use otd_cli::config::{load_rate_table, RATES_FILE_ENV};
use otd_cli::lookup::{run_lookup, LookupArgs};
use otd_cli::quote::{run_quote, QuoteArgs};
use otd_cli::schedules::{run_schedules, SchedulesArgs};

/// Out the Door Price Estimator
///
/// Estimates the total cost of buying a vehicle from its selling price and
/// the buyer's ZIP code: purchase tax, title and registration fees, and a
/// typical dealer fee for the governing state.
#[derive(Parser, Debug)]
#[command(name = "otd", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML rate table to use instead of the built-in Georgia/Texas table.
    #[arg(long, global = true, env = RATES_FILE_ENV, value_name = "PATH")]
    rates: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Itemized out-the-door estimate for a price and ZIP code.
    Quote(QuoteArgs),

    /// Show the jurisdiction and fees that apply to a ZIP code.
    Lookup(LookupArgs),

    /// List every fee schedule and ZIP range in the rate table.
    Schedules(SchedulesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Verbosity flag wins; RUST_LOG applies when no -v is given.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "otd starting");

    let table = match load_rate_table(cli.rates.as_deref()) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Quote(args) => run_quote(&args, &table),
        Commands::Lookup(args) => run_lookup(&args, &table),
        Commands::Schedules(args) => run_schedules(&args, &table),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
