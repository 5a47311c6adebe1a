//! # Lookup Subcommand
//!
//! `otd lookup <ZIP>` reports which jurisdiction governs a ZIP code.

use anyhow::Result;
use clap::Args;

use otd_core::{FeeSchedule, JurisdictionResolver, RateTable, ZipLookup};

use crate::render::{format_percent, format_usd};
use crate::OutputFormat;

/// Arguments for the `otd lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// ZIP code to look up; ZIP+4 is accepted.
    #[arg(value_name = "ZIP")]
    pub zip: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the lookup subcommand.
///
/// Returns exit code: 0 if the ZIP resolved, 1 otherwise.
pub fn run_lookup(args: &LookupArgs, table: &RateTable) -> Result<u8> {
    let lookup = JurisdictionResolver::new(table).lookup(&args.zip);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&lookup)?),
        OutputFormat::Text => print!("{}", render_lookup(&lookup)),
    }

    Ok(if lookup.schedule().is_some() { 0 } else { 1 })
}

/// Plain-text rendering of a lookup outcome.
pub fn render_lookup(lookup: &ZipLookup<'_>) -> String {
    match lookup {
        ZipLookup::Incomplete { digits } => {
            format!("ZIP incomplete: {digits} of 5 digits entered\n")
        }
        ZipLookup::Unsupported { zip } => format!("ZIP {zip}: not in a supported region\n"),
        ZipLookup::Resolved { zip, schedule } => {
            format!("ZIP {zip}: {}\n{}", schedule.jurisdiction_name, describe_schedule(schedule))
        }
    }
}

/// Indented summary of a schedule's rate and fees.
pub fn describe_schedule(schedule: &FeeSchedule) -> String {
    format!(
        "  {:<22}{}\n  {:<22}{}\n  {:<22}{}\n  {:<22}{}\n",
        schedule.tax_label,
        format_percent(schedule.tax_rate),
        "Title Fee",
        format_usd(schedule.title_fee),
        "Registration Fee",
        format_usd(schedule.registration_fee),
        "Dealer Fee (est.)",
        format_usd(schedule.dealer_fee_estimate),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(raw: &str) -> String {
        render_lookup(&JurisdictionResolver::builtin().lookup(raw))
    }

    #[test]
    fn resolved_lookup_lists_fees() {
        let text = render("30309");
        assert!(text.starts_with("ZIP 30309: Georgia"));
        assert!(text.contains("TAVT"));
        assert!(text.contains("6.80%"));
        assert!(text.contains("$899.00"));
    }

    #[test]
    fn incomplete_lookup() {
        assert_eq!(render("30"), "ZIP incomplete: 2 of 5 digits entered\n");
    }

    #[test]
    fn unsupported_lookup() {
        assert_eq!(render("90210"), "ZIP 90210: not in a supported region\n");
    }
}
