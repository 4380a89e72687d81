/// Utilities for parsing and formatting backend timestamps
///
/// Backend timestamps come in several shapes (RFC 3339 with offset, naive
/// `YYYY-MM-DD HH:MM:SS`, bare dates). Timestamps with an offset are shown
/// and compared in the browser's local time; naive ones are taken as local.
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a backend timestamp into local wall-clock time.
/// Example (UTC+05:30): "2025-01-31T20:00:00Z" -> 2025-02-01 01:30:00
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    parse_timestamp_in(value, &Local)
}

/// Same as [`parse_timestamp`], converting offsets into `tz`.
pub fn parse_timestamp_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(tz).naive_local());
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(start_of_day)
}

/// Parse a filter bound ("2025-01-31") or any timestamp into a calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(value).map(|dt| dt.date()))
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 of the given day, the inclusive upper bound of a date filter.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of_day(date))
}

/// Format a timestamp for tables
/// Example: "2025-01-31T23:05:00Z" -> "31 January 2025, 11:05 PM"
pub fn format_readable(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => {
            let (is_pm, hour12) = dt.hour12();
            format!(
                "{} {}, {}:{:02} {}",
                dt.day(),
                dt.format("%B %Y"),
                hour12,
                dt.minute(),
                if is_pm { "PM" } else { "AM" }
            )
        }
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
    }

    #[test]
    fn test_parse_timestamp_shapes() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(parse_timestamp_in("2025-01-31T23:59:59Z", &Utc), Some(expected));
        assert_eq!(parse_timestamp_in("2025-01-31T23:59:59.000+05:30", &ist()), Some(expected));
        assert_eq!(parse_timestamp("2025-01-31 23:59:59"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-31T23:59:59"), Some(expected));
        assert_eq!(
            parse_timestamp("2025-01-31"),
            Some(start_of_day(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()))
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(parse_timestamp("invalid"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_date("31/01/2025"), None);
        assert_eq!(format_readable("invalid"), "invalid");
    }

    #[test]
    fn test_offsets_convert_to_local_time() {
        // 20:00 UTC on the 31st is already February in India
        let ist_time = parse_timestamp_in("2025-01-31T20:00:00Z", &ist()).unwrap();
        assert_eq!(ist_time.to_string(), "2025-02-01 01:30:00");
        let utc_time = parse_timestamp_in("2025-01-31T20:00:00Z", &Utc).unwrap();
        assert_eq!(utc_time.to_string(), "2025-01-31 20:00:00");

        // naive timestamps are not shifted
        let naive = parse_timestamp_in("2025-01-31 20:00:00", &ist()).unwrap();
        assert_eq!(naive, utc_time);
    }

    #[test]
    fn test_day_bounds() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(start_of_day(day).to_string(), "2025-01-31 00:00:00");
        assert_eq!(end_of_day(day).to_string(), "2025-01-31 23:59:59.999");
    }

    #[test]
    fn test_format_readable() {
        assert_eq!(format_readable("2025-01-31 23:05:00"), "31 January 2025, 11:05 PM");
        assert_eq!(format_readable("2024-03-05 00:07:00"), "5 March 2024, 12:07 AM");
    }
}
