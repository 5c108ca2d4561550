#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;
use std::io::Write;

use super::*;
use crate::models::{CategoryValue, Ledger, OTHER_CATEGORY};

fn temp_store() -> (tempfile::TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(&dir.path().join("ledger.json"));
    (dir, store)
}

#[test]
fn test_load_missing_file_is_empty_ledger() {
    let (_dir, store) = temp_store();
    assert_eq!(store.load(), Ledger::default());
}

#[test]
fn test_save_then_load_round_trips() {
    let (_dir, store) = temp_store();
    let mut ledger = Ledger::default();
    ledger.add("2024-03", "food", dec!(12.5));
    ledger.add_entry("2024-03", dec!(30), "taxi".into());

    store.save(&ledger).unwrap();
    assert_eq!(store.load(), ledger);
}

#[test]
fn test_load_corrupt_blob_fails_open() {
    let (dir, store) = temp_store();
    let mut file = std::fs::File::create(dir.path().join("ledger.json")).unwrap();
    file.write_all(b"{not json").unwrap();
    drop(file);

    assert_eq!(store.load(), Ledger::default());
}

#[test]
fn test_save_replaces_whole_blob() {
    let (_dir, store) = temp_store();
    let mut first = Ledger::default();
    first.add("2024-03", "food", dec!(50));
    store.save(&first).unwrap();

    let mut second = Ledger::default();
    second.add("2024-04", "rent", dec!(900));
    store.save(&second).unwrap();

    let loaded = store.load();
    assert_eq!(loaded, second);
    assert!(loaded.month("2024-03").is_none());
}

#[test]
fn test_load_migrates_legacy_scalar_other() {
    let (dir, store) = temp_store();
    std::fs::write(
        dir.path().join("ledger.json"),
        r#"{"2024-03":{"food":12.5,"other":30}}"#,
    )
    .unwrap();

    let ledger = store.load();
    let record = ledger.month("2024-03").unwrap();
    let Some(CategoryValue::Entries(entries)) = record.get(OTHER_CATEGORY) else {
        panic!("legacy scalar other should be itemized on load");
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount, dec!(30));
}
