//! Date helper functions

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Today's UTC date as `YYYY-MM-DD`, used when a lesson has no `date`
pub fn today() -> String {
    date_stamp(&Utc::now())
}

/// Format the date portion of a timestamp as `YYYY-MM-DD`
pub fn date_stamp<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date string in various formats
///
/// Returns `None` for anything unrecognised; callers treat such dates as
/// incomparable rather than as errors.
pub fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    // Bare dates are UTC midnight, datetimes without an offset are local
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&dt).with_timezone(&Local));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_format() {
        let stamp = today();
        assert_eq!(stamp.len(), 10);
        assert!(NaiveDate::parse_from_str(&stamp, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_today_is_utc_day() {
        let before = date_stamp(&Utc::now());
        let stamp = today();
        let after = date_stamp(&Utc::now());
        assert!(stamp == before || stamp == after, "{} not in [{}, {}]", stamp, before, after);
    }

    #[test]
    fn test_date_stamp() {
        let date = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(date_stamp(&date), "2024-01-15");
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = "2025-10-24";
        for input in [
            "2025-10-24 08:15:00",
            "2025-10-24T08:15:00",
            "2025-10-24T08:15",
        ] {
            let dt = parse_date_string(input).unwrap();
            assert_eq!(date_stamp(&dt), expected, "input {}", input);
        }
    }

    #[test]
    fn test_parse_bare_date_is_utc_midnight() {
        let midnight = Utc.with_ymd_and_hms(2025, 10, 24, 0, 0, 0).unwrap();
        for input in ["2025-10-24", "2025/10/24"] {
            let dt = parse_date_string(input).unwrap();
            assert_eq!(dt.with_timezone(&Utc), midnight, "input {}", input);
        }

        let zoned = parse_date_string("2025-10-24T00:00:00Z").unwrap();
        assert_eq!(parse_date_string("2025-10-24"), Some(zoned));
    }

    #[test]
    fn test_parse_date_ordering() {
        let earlier = parse_date_string("2025-10-23").unwrap();
        let later = parse_date_string("2025-10-24 00:00:01").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date_string("yesterday").is_none());
        assert!(parse_date_string("").is_none());
        assert!(parse_date_string("2025-13-40").is_none());
    }
}
