//! Defensive timestamp rendering.
//!
//! The order service is inconsistent about timestamps: some endpoints send
//! RFC 3339 with an offset, others a naive local time with microseconds
//! (`2024-05-01T12:00:00.670331`). Anything unreadable renders as
//! [`PLACEHOLDER`] instead of failing the screen.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

/// Shown in place of a missing or unreadable date.
pub const PLACEHOLDER: &str = "—";

/// Vietnamese day/month/year, no zero padding.
const DATE_FORMAT: &str = "%-d/%-m/%Y";

const DATE_TIME_FORMAT: &str = "%H:%M:%S %-d/%-m/%Y";

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Render a backend timestamp as `d/m/yyyy`, or [`PLACEHOLDER`].
#[must_use]
pub fn safe_date(input: Option<&str>) -> String {
    render(input, DATE_FORMAT)
}

/// Render a backend timestamp as `HH:MM:SS d/m/yyyy`, or [`PLACEHOLDER`].
#[must_use]
pub fn safe_date_time(input: Option<&str>) -> String {
    render(input, DATE_TIME_FORMAT)
}

fn render(input: Option<&str>, format: &str) -> String {
    input
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| parse_timestamp(&strip_fraction(raw)))
        .map_or_else(
            || PLACEHOLDER.to_string(),
            |ts| ts.format(format).to_string(),
        )
}

/// Drop a trailing `.<digits>` sub-second run, keeping any zone suffix.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn strip_fraction(raw: &str) -> String {
    static FRACTION: OnceLock<Regex> = OnceLock::new();

    let re = FRACTION.get_or_init(|| {
        Regex::new(r"\.\d+(Z|[+-]\d{2}:?\d{2})?$").expect("fraction regex is valid")
    });

    re.replace(raw, "$1").into_owned()
}

/// Parse into the wall-clock time the backend wrote.
///
/// Offsets are honored as written rather than converted to the device zone.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_local());
    }
    // Offset without a colon, e.g. +0700.
    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(ts.naive_local());
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn none_is_placeholder() {
        assert_eq!(safe_date(None), "—");
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "blank")]
    #[test_case("not-a-date" ; "garbage")]
    #[test_case("2024-13-01" ; "month out of range")]
    #[test_case("2024-02-30T10:00:00" ; "day out of range")]
    #[test_case("1714564800" ; "epoch seconds")]
    #[test_case("2024-05-01T12:00:00.abc" ; "non digit fraction")]
    fn malformed_is_placeholder(input: &str) {
        assert_eq!(safe_date(Some(input)), PLACEHOLDER);
    }

    #[test_case("2024-05-01T12:00:00.670331", "1/5/2024" ; "naive with micros")]
    #[test_case("2024-05-01T12:00:00", "1/5/2024" ; "naive")]
    #[test_case("2024-05-01 08:30:00", "1/5/2024" ; "space separated")]
    #[test_case("2024-05-01", "1/5/2024" ; "date only")]
    #[test_case("2024-12-25T23:59:59Z", "25/12/2024" ; "utc")]
    #[test_case("2024-12-25T23:59:59.123Z", "25/12/2024" ; "utc with millis")]
    #[test_case("2024-12-25T23:59:59.5+07:00", "25/12/2024" ; "offset with fraction")]
    #[test_case("2024-12-25T01:00:00-05:00", "25/12/2024" ; "negative offset as written")]
    #[test_case("2024-05-01T12:00:00.5+0700", "1/5/2024" ; "compact offset with fraction")]
    #[test_case("2024-05-01T23:30:00-0300", "1/5/2024" ; "compact negative offset")]
    fn formats_vietnamese_date(input: &str, expected: &str) {
        assert_eq!(safe_date(Some(input)), expected);
    }

    #[test]
    fn date_time_includes_clock() {
        assert_eq!(
            safe_date_time(Some("2024-05-01T08:05:09.670331")),
            "08:05:09 1/5/2024"
        );
        assert_eq!(
            safe_date_time(Some("2024-05-01T12:00:00.5+0700")),
            "12:00:00 1/5/2024"
        );
        assert_eq!(safe_date_time(Some("bogus")), PLACEHOLDER);
    }

    #[test]
    fn strip_fraction_keeps_zone() {
        assert_eq!(strip_fraction("2024-05-01T12:00:00.670331"), "2024-05-01T12:00:00");
        assert_eq!(strip_fraction("2024-05-01T12:00:00.1Z"), "2024-05-01T12:00:00Z");
        assert_eq!(
            strip_fraction("2024-05-01T12:00:00.25+07:00"),
            "2024-05-01T12:00:00+07:00"
        );
        assert_eq!(
            strip_fraction("2024-05-01T12:00:00.5+0700"),
            "2024-05-01T12:00:00+0700"
        );
        assert_eq!(strip_fraction("2024-05-01"), "2024-05-01");
    }
}
