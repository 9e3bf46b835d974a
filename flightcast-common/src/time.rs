//! Timestamp utilities

use chrono::{DateTime, Utc};

/// Format used for prediction record timestamps (minute resolution)
pub const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Format a timestamp to minute resolution ("YYYY-MM-DD HH:MM")
///
/// Prediction records carry this string form; the chart x-axis
/// uses it directly.
pub fn minute_stamp(ts: &DateTime<Utc>) -> String {
    ts.format(MINUTE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_returns_valid_timestamp() {
        let timestamp = now();
        // Should be a reasonable timestamp (after year 2000)
        assert!(timestamp.timestamp() > 946_684_800); // 2000-01-01 00:00:00 UTC
    }

    #[test]
    fn test_minute_stamp_format() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 6, 14, 30, 45).unwrap();
        assert_eq!(minute_stamp(&ts), "2026-08-06 14:30");
    }

    #[test]
    fn test_minute_stamp_drops_seconds() {
        let a = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let b = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 59).unwrap();
        assert_eq!(minute_stamp(&a), minute_stamp(&b));
    }

    #[test]
    fn test_minute_stamp_zero_pads() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(minute_stamp(&ts), "2026-03-07 09:05");
    }
}
