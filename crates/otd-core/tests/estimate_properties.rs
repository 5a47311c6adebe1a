//! # End-to-End Estimation Properties
//!
//! Exercises the public API the way a form would: raw ZIP text in, a
//! schedule out, a breakdown computed from it. Covers the documented
//! boundary cases and worked examples, plus property tests for
//! determinism and the total identity.

use otd_core::{
    compute, compute_with_dealer_fee, normalize_zip, resolve, FeeSchedule, JurisdictionResolver,
    RateTable, ZipLookup,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn code(raw: &str) -> Option<&'static str> {
    resolve(raw).map(|s| s.jurisdiction_code.as_str())
}

fn schedule(code: &str) -> &'static FeeSchedule {
    RateTable::builtin()
        .schedules()
        .find(|s| s.jurisdiction_code.as_str() == code)
        .expect("built-in schedule")
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

#[test]
fn range_boundaries() {
    assert_eq!(code("30001"), Some("GA"));
    assert_eq!(code("31999"), Some("GA"));
    assert_eq!(code("30000"), None);
    assert_eq!(code("32000"), None);
    assert_eq!(code("75001"), Some("TX"));
    assert_eq!(code("79999"), Some("TX"));
    assert_eq!(code("80000"), None);
    assert_eq!(code("73301"), Some("TX"));
    assert_eq!(code("73300"), None);
}

#[test]
fn zip_plus_four_is_truncated_after_stripping() {
    assert_eq!(code("30309-1234"), Some("GA"));
    assert_eq!(code("(303) 09"), Some("GA"));
}

#[test]
fn malformed_input_is_unresolved() {
    assert_eq!(code(""), None);
    assert_eq!(code("abc"), None);
    assert_eq!(code("1234"), None);
}

#[test]
fn resolve_and_lookup_agree() {
    let resolver = JurisdictionResolver::builtin();
    for raw in ["", "303", "30309", "10001", "88595", "88596", "39850"] {
        assert_eq!(resolver.resolve(raw), resolver.lookup(raw).schedule(), "input {raw:?}");
    }
}

#[test]
fn incomplete_and_unsupported_are_distinguishable() {
    let resolver = JurisdictionResolver::builtin();
    assert!(matches!(resolver.lookup("3030"), ZipLookup::Incomplete { digits: 4 }));
    assert!(matches!(resolver.lookup("32000"), ZipLookup::Unsupported { .. }));
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

#[test]
fn georgia_example() {
    let b = compute(dec!(30000), schedule("GA"));
    assert_eq!(b.sales_tax, dec!(2040.00));
    assert_eq!(b.total, dec!(32977.00));
}

#[test]
fn texas_example() {
    let b = compute(dec!(30000), schedule("TX"));
    assert_eq!(b.sales_tax, dec!(1875.00));
    assert_eq!(b.total, dec!(32197.00));
}

#[test]
fn zero_price_texas() {
    let b = compute(Decimal::ZERO, schedule("TX"));
    assert_eq!(b.sales_tax, Decimal::ZERO);
    assert_eq!(b.total, dec!(322.00));
}

#[test]
fn zip_to_total_pipeline() {
    let total = resolve("78701").map(|s| compute(dec!(30000), s).total);
    assert_eq!(total, Some(dec!(32197.00)));
}

#[test]
fn breakdown_serializes_amounts_as_strings() {
    let b = compute(dec!(30000), schedule("GA"));
    let json = serde_json::to_value(&b).unwrap();
    let total: Decimal = json["total"].as_str().unwrap().parse().unwrap();
    assert_eq!(total, dec!(32977));
    assert_eq!(json["tax_rate"], "0.068");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn price() -> impl Strategy<Value = Decimal> {
    // Up to ten million dollars, in cents.
    (0i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    /// Resolution is deterministic for any input text.
    #[test]
    fn resolve_deterministic(raw in ".{0,16}") {
        prop_assert_eq!(resolve(&raw), resolve(&raw));
    }

    /// Only the first five digits matter; surrounding noise is ignored.
    #[test]
    fn resolve_depends_only_on_normalized_digits(zip in 0u32..100_000, noise in "[a-z -]{0,4}") {
        let plain = format!("{zip:05}");
        let noisy = format!("{noise}{plain}{noise}9999");
        prop_assert_eq!(normalize_zip(&noisy), plain.clone());
        prop_assert_eq!(resolve(&noisy), resolve(&plain));
    }

    /// Fewer than five digits never resolve.
    #[test]
    fn short_input_never_resolves(digits in "[0-9]{0,4}") {
        prop_assert!(resolve(&digits).is_none());
    }

    /// Every resolved ZIP lies in a range of the returned jurisdiction.
    #[test]
    fn resolved_zip_is_in_a_range_of_its_jurisdiction(zip in 0u32..100_000) {
        let raw = format!("{zip:05}");
        if let Some(schedule) = resolve(&raw) {
            let table = RateTable::builtin();
            let in_range = table
                .ranges_for(&schedule.jurisdiction_code)
                .any(|r| r.low <= zip && zip <= r.high);
            prop_assert!(in_range);
        }
    }

    /// The total is exactly the sum of its parts.
    #[test]
    fn total_is_sum_of_parts(p in price(), ga in any::<bool>()) {
        let s = schedule(if ga { "GA" } else { "TX" });
        let b = compute(p, s);
        prop_assert_eq!(b.sales_tax, p * s.tax_rate);
        prop_assert_eq!(
            b.total,
            b.selling_price + b.sales_tax + b.title_fee + b.registration_fee + b.dealer_fee
        );
    }

    /// Computation is idempotent.
    #[test]
    fn compute_idempotent(p in price()) {
        prop_assert_eq!(compute(p, schedule("GA")), compute(p, schedule("GA")));
    }

    /// A dealer fee override shifts the total by exactly the difference.
    #[test]
    fn dealer_override_shifts_total(p in price(), fee in 0i64..500_000) {
        let s = schedule("TX");
        let fee = Decimal::new(fee, 2);
        let base = compute(p, s);
        let overridden = compute_with_dealer_fee(p, s, Some(fee));
        prop_assert_eq!(overridden.total - base.total, fee - s.dealer_fee_estimate);
    }
}
