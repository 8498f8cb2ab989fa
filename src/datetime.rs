//! Date/time display helpers.
//!
//! Upload dates are stored by SQLite as UTC text (`YYYY-MM-DD HH:MM:SS`).

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Default display format for upload dates.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Parse a stored timestamp (SQLite or RFC3339 text) as UTC.
pub fn parse_utc(datetime_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format a stored UTC timestamp in the given timezone.
///
/// Returns the input unchanged when either the timestamp or the timezone
/// cannot be parsed.
pub fn format_datetime(datetime_str: &str, timezone: &str, format: &str) -> String {
    let tz: Tz = match timezone.parse() {
        Ok(tz) => tz,
        Err(_) => return datetime_str.to_string(),
    };

    match parse_utc(datetime_str) {
        Some(utc) => utc.with_timezone(&tz).format(format).to_string(),
        None => datetime_str.to_string(),
    }
}

/// Format a stored UTC timestamp with [`DEFAULT_FORMAT`].
pub fn format_datetime_default(datetime_str: &str, timezone: &str) -> String {
    format_datetime(datetime_str, timezone, DEFAULT_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utc_sqlite() {
        let dt = parse_utc("2024-01-15 10:30:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_parse_utc_rfc3339() {
        let dt = parse_utc("2024-01-15T19:30:00+09:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_parse_utc_invalid() {
        assert!(parse_utc("yesterday").is_none());
    }

    #[test]
    fn test_format_datetime_timezone() {
        let result = format_datetime("2024-01-15 10:30:00", "Asia/Tokyo", "%Y/%m/%d %H:%M");
        assert_eq!(result, "2024/01/15 19:30");
    }

    #[test]
    fn test_format_datetime_invalid_timezone() {
        let dt = "2024-01-15 10:30:00";
        assert_eq!(format_datetime(dt, "Invalid/Zone", "%H:%M"), dt);
    }

    #[test]
    fn test_format_datetime_invalid_datetime() {
        assert_eq!(format_datetime("not a date", "UTC", "%H:%M"), "not a date");
    }

    #[test]
    fn test_format_datetime_default() {
        let result = format_datetime_default("2024-01-15 10:30:00", "UTC");
        assert_eq!(result, "2024-01-15 10:30:00 UTC");
    }
}
