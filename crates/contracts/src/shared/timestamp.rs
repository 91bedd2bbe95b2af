//! Parsing of the timestamps the API emits (`isoformat()` output, with or
//! without fractional seconds and offset).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO timestamp into wall-clock time as written by the server.
/// Offsets are kept as-is (the naive local part is returned).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse the date part of an ISO timestamp or date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap();
        assert_eq!(parse_timestamp("2024-03-15T14:02:26"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-03-15T14:02:26.123456").map(|d| d.date()),
            Some(expected.date())
        );
        assert_eq!(parse_timestamp("2024-03-15T14:02:26-03:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("ayer"), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-15T14:02:26"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_date("15/03/2024"), None);
    }
}
