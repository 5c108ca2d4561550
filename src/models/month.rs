use chrono::{Datelike, Local, NaiveDate};

/// A selectable month: the `YYYY-MM` storage key and its display label
/// ("March 2024").
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Month {
    pub(crate) key: String,
    pub(crate) label: String,
}

/// Storage key for the current month, zero-padded (`2024-03`).
pub(crate) fn current_month_key() -> String {
    Local::now().format("%Y-%m").to_string()
}

/// The current month and the `n - 1` preceding it, most recent first.
pub(crate) fn recent_months(n: usize) -> Vec<Month> {
    recent_months_from(Local::now().date_naive(), n)
}

fn recent_months_from(today: NaiveDate, n: usize) -> Vec<Month> {
    let mut year = today.year();
    let mut month = today.month();
    let mut months = Vec::with_capacity(n);
    for _ in 0..n {
        months.push(Month {
            key: format!("{year:04}-{month:02}"),
            label: label_for(year, month),
        });
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }
    months
}

fn label_for(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{year:04}-{month:02}"))
}
