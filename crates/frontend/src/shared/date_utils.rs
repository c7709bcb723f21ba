/// Utilities for date formatting
///
/// Content dates are stored as ISO strings and shown in long US form
use chrono::{Datelike, NaiveDate};

/// Format ISO date string to "Month D, YYYY"
/// Example: "2024-01-15" or "2024-01-15T09:30:00Z" -> "January 15, 2024"
///
/// Input that does not parse is returned unchanged.
pub fn format_long_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Current calendar year, for the footer copyright
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-01-15"), "January 15, 2024");
        assert_eq!(format_long_date("2024-01-01"), "January 1, 2024");
        assert_eq!(format_long_date("2023-12-31T23:59:59Z"), "December 31, 2023");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_long_date("invalid"), "invalid");
        assert_eq!(format_long_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_long_date(""), "");
    }
}
