//! Date display helpers shared by the tables and dashboards.

use chrono::{Local, NaiveDate};

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `"Jun 10, 2025"`, or `"-"` when missing
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => "-".to_string(),
    }
}

/// Like [`format_date`] but `"N/A"` when missing
pub fn format_date_or_na(date: Option<NaiveDate>) -> String {
    date.map(|d| format_date(Some(d)))
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn warranty_label(expiry: Option<NaiveDate>) -> String {
    match expiry {
        Some(d) => format!("Until {}", d),
        None => "N/A".to_string(),
    }
}

pub fn days_label(days: i64) -> String {
    if days.abs() == 1 {
        format!("{} day", days)
    } else {
        format!("{} days", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(day(2025, 6, 1)), "Jun 1, 2025");
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date_or_na(None), "N/A");
    }

    #[test]
    fn test_labels() {
        assert_eq!(warranty_label(day(2026, 1, 31)), "Until 2026-01-31");
        assert_eq!(days_label(1), "1 day");
        assert_eq!(days_label(5), "5 days");
    }
}
