//! # Display Formatting
//!
//! US-dollar and percent formatting plus the plain-text breakdown table.
//! Rounding to cents happens here and nowhere else; the core keeps exact
//! values.

use otd_core::{FeeSchedule, PriceBreakdown};
use rust_decimal::{Decimal, RoundingStrategy};

/// Shown in place of an amount when there is nothing to compute yet.
pub const PLACEHOLDER: &str = "—";

const LABEL_WIDTH: usize = 34;
const VALUE_WIDTH: usize = 24;

/// Format an amount as US currency, e.g. `$32,977.00`.
///
/// Rounds half away from zero to whole cents.
pub fn format_usd(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if negative { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Format a fractional rate as a percentage with two decimals, e.g. `6.80%`.
pub fn format_percent(rate: Decimal) -> String {
    let pct = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{pct:.2}%")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One line of the breakdown table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Left-hand label.
    pub label: String,
    /// Optional explanatory line printed under the label.
    pub helper: Option<String>,
    /// Right-hand formatted amount.
    pub value: String,
}

impl Row {
    fn new(label: impl Into<String>, helper: Option<String>, value: String) -> Self {
        Self {
            label: label.into(),
            helper,
            value,
        }
    }
}

/// Build the table rows for a schedule and breakdown.
///
/// Either may be absent. Without a schedule the tax row falls back to the
/// generic label "Tax" and helpers are omitted; without a breakdown every
/// amount is [`PLACEHOLDER`].
pub fn breakdown_rows(schedule: Option<&FeeSchedule>, breakdown: Option<&PriceBreakdown>) -> Vec<Row> {
    let amount = |pick: fn(&PriceBreakdown) -> Decimal| {
        breakdown.map_or_else(|| PLACEHOLDER.to_string(), |b| format_usd(pick(b)))
    };
    let helper = |text: &str| schedule.map(|s| format!("{text} in {}", s.jurisdiction_name));

    let tax_label = schedule.map_or("Tax", |s| s.tax_label.as_str());
    let tax_helper = schedule
        .map(|s| s.tax_description.clone())
        .filter(|d| !d.is_empty());
    let tax_value = breakdown.map_or_else(
        || PLACEHOLDER.to_string(),
        |b| format!("{} ({})", format_usd(b.sales_tax), format_percent(b.tax_rate)),
    );

    vec![
        Row::new("Selling Price", None, amount(|b| b.selling_price)),
        Row::new(tax_label, tax_helper, tax_value),
        Row::new("Title Fee", helper("Title fee"), amount(|b| b.title_fee)),
        Row::new(
            "Registration Fee",
            helper("Registration fee"),
            amount(|b| b.registration_fee),
        ),
        Row::new(
            "Estimated Dealer Fees",
            helper("Typical dealer processing fees"),
            amount(|b| b.dealer_fee),
        ),
    ]
}

/// Render the full breakdown table, including header and total line.
pub fn render_table(schedule: Option<&FeeSchedule>, breakdown: Option<&PriceBreakdown>) -> String {
    let mut out = String::new();
    push_line(&mut out, "Purchase Details", "Amount");
    out.push_str(&"-".repeat(LABEL_WIDTH + VALUE_WIDTH));
    out.push('\n');
    for row in breakdown_rows(schedule, breakdown) {
        push_line(&mut out, &row.label, &row.value);
        if let Some(helper) = row.helper {
            out.push_str(&format!("  {helper}\n"));
        }
    }
    out.push_str(&"=".repeat(LABEL_WIDTH + VALUE_WIDTH));
    out.push('\n');
    let total = breakdown.map_or_else(|| PLACEHOLDER.to_string(), |b| format_usd(b.total));
    push_line(&mut out, "Total Out The Door", &total);
    out
}

fn push_line(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{label:<LABEL_WIDTH$}{value:>VALUE_WIDTH$}\n"));
}
