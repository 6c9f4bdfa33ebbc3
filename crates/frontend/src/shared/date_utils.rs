/// Utilities for date formatting in the analytics settings

use chrono::{NaiveDate, NaiveDateTime};

/// Значение `imported_from`, которым сервер помечает импорт всех данных
pub const ALL_DATA_MARKER: &str = "-1";

/// Parse a date from `<input type="date">` (YYYY-MM-DD)
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format `imported_from` for display
/// Example: "2019-04-01 00:00:00" -> "2019-04-01"
pub fn format_import_date(value: &str) -> String {
    let value = value.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    if let Some(date) = value.get(..10).and_then(parse_input_date) {
        return date.format("%Y-%m-%d").to_string();
    }
    value.to_string()
}
