use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The distinguished free-form category. Submissions under it are kept as
/// itemized entries instead of a single accumulator.
pub const OTHER_CATEGORY: &str = "other";

/// Categories offered by the entry form. Keys use underscores; `humanize`
/// turns them into display names.
pub const CATEGORIES: &[&str] = &[
    "groceries",
    "rent",
    "utilities",
    "transport",
    "eating_out",
    "entertainment",
    "health",
    OTHER_CATEGORY,
];

/// Remark attached to a legacy scalar `other` total when it is migrated to
/// the itemized form.
const MIGRATED_REMARK: &str = "(unlabelled)";

/// One itemized expense recorded under [`OTHER_CATEGORY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeEntry {
    pub amount: Decimal,
    pub remark: String,
}

/// A category's stored value. Serialized untagged — a plain number for
/// `Total`, an array for `Entries` — so blobs written by both evolutions of
/// the storage schema deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryValue {
    Total(Decimal),
    Entries(Vec<FreeEntry>),
}

impl CategoryValue {
    /// The value collapsed to a single amount.
    pub fn total(&self) -> Decimal {
        match self {
            Self::Total(total) => *total,
            Self::Entries(entries) => entries.iter().map(|e| e.amount).sum(),
        }
    }
}

/// One month's category → value data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthRecord {
    categories: BTreeMap<String, CategoryValue>,
}

impl MonthRecord {
    pub fn get(&self, category: &str) -> Option<&CategoryValue> {
        self.categories.get(category)
    }

    /// Categories in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryValue)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Accumulate `amount` into an ordinary category's scalar total.
    /// An entry list found under the name (malformed blob) is collapsed
    /// into its sum first.
    pub fn add(&mut self, category: &str, amount: Decimal) {
        let value = self
            .categories
            .entry(category.to_string())
            .or_insert(CategoryValue::Total(Decimal::ZERO));
        *value = CategoryValue::Total(value.total() + amount);
    }

    /// Append a free entry under [`OTHER_CATEGORY`]. A legacy scalar value
    /// is itemized first so no amount is lost.
    pub fn add_entry(&mut self, amount: Decimal, remark: String) {
        let value = self
            .categories
            .entry(OTHER_CATEGORY.to_string())
            .or_insert_with(|| CategoryValue::Entries(Vec::new()));
        itemize(value);
        if let CategoryValue::Entries(entries) = value {
            entries.push(FreeEntry { amount, remark });
        }
    }
}

/// The full set of monthly expense records, keyed `YYYY-MM`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    months: BTreeMap<String, MonthRecord>,
}

impl Ledger {
    pub fn month(&self, key: &str) -> Option<&MonthRecord> {
        self.months.get(key)
    }

    /// Accumulate into an ordinary category for the given month.
    pub fn add(&mut self, month: &str, category: &str, amount: Decimal) {
        self.months.entry(month.to_string()).or_default().add(category, amount);
    }

    /// Append a free entry under `other` for the given month.
    pub fn add_entry(&mut self, month: &str, amount: Decimal, remark: String) {
        self.months.entry(month.to_string()).or_default().add_entry(amount, remark);
    }

    /// Migrate legacy blobs to the canonical schema: a scalar `other` total
    /// becomes a single unlabelled free entry. Idempotent.
    pub fn normalize(&mut self) {
        for record in self.months.values_mut() {
            if let Some(value) = record.categories.get_mut(OTHER_CATEGORY) {
                itemize(value);
            }
        }
    }
}

fn itemize(value: &mut CategoryValue) {
    if let CategoryValue::Total(total) = value {
        let entries = if total.is_zero() {
            Vec::new()
        } else {
            vec![FreeEntry {
                amount: *total,
                remark: MIGRATED_REMARK.to_string(),
            }]
        };
        *value = CategoryValue::Entries(entries);
    }
}
