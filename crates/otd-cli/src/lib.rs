//! # otd-cli: Out-the-Door Estimator Command Line
//!
//! The presentation layer over `otd-core`: parses raw price and ZIP text,
//! decides whether a breakdown is ready to show, and formats amounts as
//! US dollars.
//!
//! ## Subcommands
//!
//! - `otd quote <PRICE> <ZIP>`: Itemized out-the-door estimate.
//! - `otd lookup <ZIP>`: Jurisdiction and fees for a ZIP code.
//! - `otd schedules`: Every schedule and ZIP range in the rate table.
//!
//! ```bash
//! otd quote 30000 30309
//! otd quote '$24,500' 75001-1234 --dealer-fee 0 --format json
//! otd --rates rates.yaml lookup 87501
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Resolution and arithmetic live in `otd-core`; rounding and display
//!   live here.

pub mod config;
pub mod lookup;
pub mod quote;
pub mod render;
pub mod schedules;

/// Output format shared by all subcommands.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}
