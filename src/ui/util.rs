use rust_decimal::Decimal;

/// Format an amount to a fixed two decimal places, e.g. `12.5` → `"12.50"`.
/// No currency symbol and no grouping; rounding happens only here.
pub(crate) fn format_amount(val: Decimal) -> String {
    format!("{val:.2}")
}

/// Display form of a category key: every underscore becomes a space
/// (`"eating_out"` → `"eating out"`). Idempotent.
pub(crate) fn humanize(name: &str) -> String {
    name.replace('_', " ")
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as
/// one). Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}
