#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "0.00");
}

#[test]
fn test_format_amount_pads_decimals() {
    assert_eq!(format_amount(dec!(12.5)), "12.50");
    assert_eq!(format_amount(dec!(900)), "900.00");
}

#[test]
fn test_format_amount_exact_two_decimals() {
    assert_eq!(format_amount(dec!(42.99)), "42.99");
}

#[test]
fn test_format_amount_no_grouping() {
    assert_eq!(format_amount(dec!(1234567.89)), "1234567.89");
}

// ── humanize ──────────────────────────────────────────────────

#[test]
fn test_humanize_replaces_underscores() {
    assert_eq!(humanize("eating_out"), "eating out");
}

#[test]
fn test_humanize_replaces_all_underscores() {
    assert_eq!(humanize("a_b_c"), "a b c");
}

#[test]
fn test_humanize_plain_name_unchanged() {
    assert_eq!(humanize("rent"), "rent");
}

#[test]
fn test_humanize_is_idempotent() {
    let once = humanize("eating_out");
    assert_eq!(humanize(&once), once);
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("taxi", 10), "taxi");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("train tickets to the coast", 12), "train ticke…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("taxi", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}
