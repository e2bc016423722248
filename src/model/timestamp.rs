//! Epoch-millisecond timestamps rendered in ISO-8601 extended format.
//!
//! Output always carries millisecond precision and a `Z` suffix, e.g.
//! `1970-01-06T07:18:15.425Z`. Years outside `0000..=9999` use the expanded
//! six-digit signed form (`+010000-01-01T00:00:00.000Z`).

use chrono::{DateTime, Datelike, Utc};

pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Format `millis` as ISO-8601. `None` when chrono cannot represent the instant
/// (roughly beyond year 262143 in either direction).
pub fn to_iso8601(millis: i64) -> Option<String> {
    let datetime = from_epoch_millis(millis)?;
    Some(format_datetime(&datetime))
}

fn format_datetime(datetime: &DateTime<Utc>) -> String {
    let year = datetime.year();
    let year = if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else {
        format!("{year:+07}")
    };
    format!("{}-{}", year, datetime.format("%m-%dT%H:%M:%S%.3fZ"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_zero() {
        assert_eq!(to_iso8601(0).as_deref(), Some("1970-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_catalog_values() {
        assert_eq!(
            to_iso8601(458295425).as_deref(),
            Some("1970-01-06T07:18:15.425Z")
        );
        assert_eq!(
            to_iso8601(650276225).as_deref(),
            Some("1970-01-08T12:37:56.225Z")
        );
        assert_eq!(
            to_iso8601(713434625).as_deref(),
            Some("1970-01-09T06:10:34.625Z")
        );
    }

    #[test]
    fn test_oversized_value_formats_far_future_date() {
        assert_eq!(
            to_iso8601(3243463441253).as_deref(),
            Some("2072-10-12T02:04:01.253Z")
        );
    }

    #[test]
    fn test_negative_millis_before_epoch() {
        assert_eq!(to_iso8601(-1).as_deref(), Some("1969-12-31T23:59:59.999Z"));
    }

    #[test]
    fn test_expanded_years() {
        assert_eq!(
            to_iso8601(253402300800000).as_deref(),
            Some("+010000-01-01T00:00:00.000Z")
        );
        assert_eq!(
            to_iso8601(-62167219200500).as_deref(),
            Some("-000001-12-31T23:59:59.500Z")
        );
    }

    #[test]
    fn test_unrepresentable_returns_none() {
        assert_eq!(to_iso8601(i64::MAX), None);
        assert_eq!(to_iso8601(i64::MIN), None);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(to_iso8601(3243463441253), to_iso8601(3243463441253));
    }
}
