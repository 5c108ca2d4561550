use rust_decimal::Decimal;

use crate::models::{CategoryValue, FreeEntry, MonthRecord, OTHER_CATEGORY};

/// How many top categories the highlights panel surfaces.
pub(crate) const HIGHLIGHT_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryTotal {
    pub(crate) name: String,
    pub(crate) total: Decimal,
}

/// A month's computed aggregate: per-category totals in descending order,
/// the retained `other` entries for sub-row display, and the grand total.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct MonthSummary {
    pub(crate) rows: Vec<CategoryTotal>,
    pub(crate) other_entries: Vec<FreeEntry>,
    pub(crate) grand_total: Decimal,
}

impl MonthSummary {
    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `k` rows of the ranked order; fewer when the month has
    /// fewer categories.
    pub(crate) fn top(&self, k: usize) -> &[CategoryTotal] {
        &self.rows[..k.min(self.rows.len())]
    }
}

/// Collapse one month's raw category data into display totals.
///
/// The `other` total is the sum of its free entries; every other category
/// reports its stored accumulator. Rows come back sorted by descending
/// total; equal totals keep the record's alphabetical key order (the sort
/// is stable).
pub(crate) fn summarize(record: &MonthRecord) -> MonthSummary {
    let mut rows = Vec::new();
    let mut other_entries = Vec::new();
    let mut grand_total = Decimal::ZERO;

    for (name, value) in record.iter() {
        if let CategoryValue::Entries(entries) = value {
            if entries.is_empty() {
                continue;
            }
            if name == OTHER_CATEGORY {
                other_entries = entries.clone();
            }
        }
        let total = value.total();
        grand_total += total;
        rows.push(CategoryTotal {
            name: name.to_string(),
            total,
        });
    }

    rows.sort_by(|a, b| b.total.cmp(&a.total));

    MonthSummary {
        rows,
        other_entries,
        grand_total,
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
