//! # CLI Command Tests
//!
//! Runs the built `otd` binary and checks output and exit codes.

use std::process::{Command, Output};

fn otd(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_otd"))
        .args(args)
        .env_remove("OTD_RATES_FILE")
        .env_remove("RUST_LOG")
        .output()
        .expect("otd binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn quote_georgia_text() {
    let out = otd(&["quote", "30000", "30309"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("Region: Georgia"));
    assert!(text.contains("$2,040.00 (6.80%)"));
    assert!(text.contains("$32,977.00"));
}

#[test]
fn quote_texas_json() {
    let out = otd(&["quote", "$30,000", "75001-1234", "--format", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["zip"], "75001");
    assert_eq!(json["schedule"]["tax_label"], "Sales Tax");
    let total: rust_decimal::Decimal = json["breakdown"]["total"].as_str().unwrap().parse().unwrap();
    assert_eq!(total, rust_decimal_macros::dec!(32197));
}

#[test]
fn quote_unsupported_zip_exits_one() {
    let out = otd(&["quote", "30000", "90210"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("outside the supported regions"));
}

#[test]
fn quote_zero_price_exits_one() {
    let out = otd(&["quote", "0", "30309"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("greater than zero"));
}

#[test]
fn quote_with_dealer_fee_override() {
    let out = otd(&["quote", "30000", "30309", "--dealer-fee", "499"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("$32,577.00"));
}

#[test]
fn quote_rejects_unparsable_dealer_fee() {
    let out = otd(&["quote", "30000", "30309", "--dealer-fee", "abc"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not a dollar amount"));
}

#[test]
fn quote_rejects_negative_dealer_fee() {
    let out = otd(&["quote", "30000", "30309", "--dealer-fee=-5"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn lookup_incomplete() {
    let out = otd(&["lookup", "303"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("3 of 5 digits"));
}

#[test]
fn schedules_json_is_a_rate_file() {
    let out = otd(&["schedules", "--format", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["schedules"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["ranges"].as_array().map(Vec::len), Some(5));
}

#[test]
fn custom_rates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rates.yaml");
    std::fs::write(
        &path,
        r#"
schedules:
  - jurisdiction_code: NM
    jurisdiction_name: New Mexico
    tax_label: MVET
    tax_rate: "0.04"
    title_fee: "5"
    registration_fee: "27"
    dealer_fee_estimate: "300"
ranges:
  - jurisdiction: NM
    low: 87001
    high: 88439
"#,
    )
    .unwrap();

    let path = path.to_str().unwrap();
    let out = otd(&["--rates", path, "quote", "10000", "87501"]);
    assert_eq!(out.status.code(), Some(0));
    // 10000 + 400 + 5 + 27 + 300
    assert!(stdout(&out).contains("$10,732.00"));

    let out = otd(&["--rates", path, "lookup", "30309"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn missing_rates_file_exits_two() {
    let out = otd(&["--rates", "/nonexistent/rates.yaml", "schedules"]);
    assert_eq!(out.status.code(), Some(2));
}
