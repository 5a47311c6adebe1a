//! # Quote Subcommand
//!
//! `otd quote <PRICE> <ZIP>` prints the out-the-door breakdown.
//!
//! A breakdown is shown only when the ZIP resolves and the price is
//! positive. Otherwise every amount is a placeholder and the reason is
//! reported: an incomplete ZIP, a complete but unsupported ZIP, or a
//! non-positive price.

use std::str::FromStr;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use otd_core::{
    compute_with_dealer_fee, parse_price, FeeSchedule, JurisdictionResolver, PriceBreakdown,
    RateTable, ZipLookup,
};

use crate::render::{format_usd, render_table, PLACEHOLDER};
use crate::OutputFormat;

/// Arguments for the `otd quote` subcommand.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Selling price, e.g. "30000" or "$30,000.00".
    #[arg(value_name = "PRICE")]
    pub price: String,

    /// Buyer's ZIP code; ZIP+4 is accepted.
    #[arg(value_name = "ZIP")]
    pub zip: String,

    /// Replace the jurisdiction's estimated dealer fee with this amount.
    #[arg(long, value_name = "AMOUNT", value_parser = parse_dealer_fee)]
    pub dealer_fee: Option<Decimal>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Strict parse of a `--dealer-fee` value.
///
/// Commas and a dollar sign are allowed; anything else that is not a
/// non-negative decimal is rejected, so a typo never becomes a zero fee.
pub fn parse_dealer_fee(raw: &str) -> Result<Decimal, String> {
    let cleaned: String = raw.trim().chars().filter(|c| !matches!(c, ',' | '$')).collect();
    let amount = Decimal::from_str(&cleaned).map_err(|_| format!("`{raw}` is not a dollar amount"))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(format!("dealer fee must not be negative, got {raw}"));
    }
    Ok(amount)
}

/// Why no breakdown can be shown yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotReady {
    /// Fewer than five ZIP digits.
    ZipIncomplete,
    /// Five digits outside every supported range.
    ZipUnsupported,
    /// Price is zero, negative, or unparsable.
    PriceNotPositive,
}

impl NotReady {
    /// User-facing explanation.
    pub fn message(&self) -> &'static str {
        match self {
            Self::ZipIncomplete => "Enter a 5-digit ZIP code.",
            Self::ZipUnsupported => "ZIP code is outside the supported regions.",
            Self::PriceNotPositive => "Enter a selling price greater than zero.",
        }
    }
}

/// Result of gating raw price and ZIP text into a breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct Quote<'t> {
    /// Normalized ZIP, when five digits were present.
    pub zip: Option<String>,
    /// Resolved schedule, if any.
    pub schedule: Option<&'t FeeSchedule>,
    /// The breakdown, present only when ready.
    pub breakdown: Option<PriceBreakdown>,
    /// Reason the breakdown is absent.
    pub not_ready: Option<NotReady>,
}

impl Quote<'_> {
    /// Whether a breakdown was computed.
    pub fn is_ready(&self) -> bool {
        self.breakdown.is_some()
    }
}

/// Resolve the ZIP and, if ready, compute the breakdown.
///
/// ZIP problems take precedence over price problems in `not_ready`, since
/// the ZIP decides which fees apply at all.
pub fn estimate<'t>(
    resolver: &JurisdictionResolver<'t>,
    price: Decimal,
    raw_zip: &str,
    dealer_fee_override: Option<Decimal>,
) -> Quote<'t> {
    let lookup = resolver.lookup(raw_zip);
    let zip = lookup.zip().map(|z| z.to_string());
    let schedule = lookup.schedule();

    let not_ready = match lookup {
        ZipLookup::Incomplete { .. } => Some(NotReady::ZipIncomplete),
        ZipLookup::Unsupported { .. } => Some(NotReady::ZipUnsupported),
        ZipLookup::Resolved { .. } if price <= Decimal::ZERO => Some(NotReady::PriceNotPositive),
        ZipLookup::Resolved { .. } => None,
    };

    let breakdown = match (schedule, not_ready) {
        (Some(schedule), None) => Some(compute_with_dealer_fee(price, schedule, dealer_fee_override)),
        _ => None,
    };

    Quote {
        zip,
        schedule,
        breakdown,
        not_ready,
    }
}

/// Execute the quote subcommand.
///
/// Returns exit code: 0 when a breakdown was shown, 1 when not ready.
pub fn run_quote(args: &QuoteArgs, table: &RateTable) -> Result<u8> {
    let resolver = JurisdictionResolver::new(table);
    let price = parse_price(&args.price);

    let quote = estimate(&resolver, price, &args.zip, args.dealer_fee);
    tracing::debug!(
        ready = quote.is_ready(),
        zip = quote.zip.as_deref().unwrap_or(""),
        "quote evaluated"
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&quote)?),
        OutputFormat::Text => print!("{}", render_quote(price, &quote)),
    }

    Ok(if quote.is_ready() { 0 } else { 1 })
}

/// Plain-text rendering of a quote, header through total.
pub fn render_quote(price: Decimal, quote: &Quote<'_>) -> String {
    let mut out = String::from("Out the Door Price Estimator\n");
    let price = if price > Decimal::ZERO { format_usd(price) } else { PLACEHOLDER.to_string() };
    let zip = quote.zip.as_deref().unwrap_or(PLACEHOLDER);
    let region = quote.schedule.map_or(PLACEHOLDER, |s| s.jurisdiction_name.as_str());
    out.push_str(&format!("Selling price: {price}   ZIP: {zip}   Region: {region}\n\n"));
    out.push_str(&render_table(quote.schedule, quote.breakdown.as_ref()));
    if let Some(reason) = quote.not_ready {
        out.push('\n');
        out.push_str(reason.message());
        out.push('\n');
    }
    out
}
