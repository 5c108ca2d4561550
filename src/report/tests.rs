#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn sample_record() -> MonthRecord {
    let mut record = MonthRecord::default();
    record.add("food", dec!(50));
    record.add("rent", dec!(900));
    record.add("fun", dec!(10));
    record
}

// ── Aggregation ───────────────────────────────────────────────

#[test]
fn test_grand_total_is_sum_of_categories() {
    let summary = summarize(&sample_record());
    assert_eq!(summary.grand_total, dec!(960));
}

#[test]
fn test_rows_sorted_descending() {
    let summary = summarize(&sample_record());
    let names: Vec<&str> = summary.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["rent", "food", "fun"]);
}

#[test]
fn test_other_collapses_to_entry_sum() {
    let mut record = MonthRecord::default();
    record.add_entry(dec!(30), "taxi".into());
    record.add_entry(dec!(12.75), "gift".into());

    let summary = summarize(&record);
    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.rows[0].name, "other");
    assert_eq!(summary.rows[0].total, dec!(42.75));
    assert_eq!(summary.grand_total, dec!(42.75));
}

#[test]
fn test_other_entries_retained_in_order() {
    let mut record = MonthRecord::default();
    record.add_entry(dec!(30), "taxi".into());
    record.add_entry(dec!(5), "stamps".into());

    let summary = summarize(&record);
    let remarks: Vec<&str> = summary
        .other_entries
        .iter()
        .map(|e| e.remark.as_str())
        .collect();
    assert_eq!(remarks, vec!["taxi", "stamps"]);
}

#[test]
fn test_empty_entry_list_produces_no_row() {
    let mut ledger: crate::models::Ledger =
        serde_json::from_str(r#"{"2024-03":{"other":[],"food":10.0}}"#).unwrap();
    ledger.normalize();
    let summary = summarize(ledger.month("2024-03").unwrap());
    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.rows[0].name, "food");
    assert!(summary.other_entries.is_empty());
}

#[test]
fn test_empty_record_summary() {
    let summary = summarize(&MonthRecord::default());
    assert!(summary.is_empty());
    assert_eq!(summary.grand_total, Decimal::ZERO);
    assert!(summary.top(HIGHLIGHT_COUNT).is_empty());
}

#[test]
fn test_summarize_is_idempotent() {
    let record = sample_record();
    assert_eq!(summarize(&record), summarize(&record));
}

// ── Ranking ───────────────────────────────────────────────────

#[test]
fn test_top_two_of_three() {
    let summary = summarize(&sample_record());
    let top: Vec<&str> = summary.top(2).iter().map(|r| r.name.as_str()).collect();
    assert_eq!(top, vec!["rent", "food"]);
}

#[test]
fn test_top_beyond_len_returns_all() {
    let summary = summarize(&sample_record());
    assert_eq!(summary.top(10).len(), 3);
}

#[test]
fn test_tie_break_is_alphabetical() {
    let mut record = MonthRecord::default();
    record.add("transport", dec!(25));
    record.add("groceries", dec!(25));
    record.add("rent", dec!(25));

    let summary = summarize(&record);
    let names: Vec<&str> = summary.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["groceries", "rent", "transport"]);
}

#[test]
fn test_single_category_highlight() {
    let mut record = MonthRecord::default();
    record.add("rent", dec!(900));
    let summary = summarize(&record);
    assert_eq!(summary.top(HIGHLIGHT_COUNT).len(), 1);
}
