//! Calendar year-month value type and visit-instant parsing.
//!
//! # Responsibility
//! - Parse and render `YYYY-MM` month keys used by month filtering.
//! - Resolve a record's visit instant into the local calendar.
//!
//! # Invariants
//! - `YearMonth` ordering follows chronological order.
//! - Unparseable visit instants resolve to no month instead of an error.

use crate::model::record::GoshuinRecord;
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static YEAR_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("valid year-month regex"));

/// A calendar year and month pair used for grouping and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Creates a year-month; `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Parses a `YYYY-MM` month key, e.g. `2024-05`.
    pub fn parse(value: &str) -> Option<Self> {
        let caps = YEAR_MONTH_RE.captures(value.trim())?;
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        Self::new(year, month)
    }

    /// The local-calendar month containing `instant`.
    pub fn of_local(instant: &DateTime<Local>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parses a stored visit instant into the local timezone.
///
/// Accepts RFC 3339 instants and bare `YYYY-MM-DD` dates (the date edit
/// form writes date-only input); anything else yields `None`.
pub fn parse_visit_instant(value: &str) -> Option<DateTime<Local>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Local));
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Local.from_local_datetime(&midnight).single()
}

/// The local-calendar month of a record's visit, when parseable.
pub fn visit_month(record: &GoshuinRecord) -> Option<YearMonth> {
    parse_visit_instant(&record.visit_date).map(|instant| YearMonth::of_local(&instant))
}

#[cfg(test)]
mod tests {
    use super::{parse_visit_instant, YearMonth};
    use chrono::Datelike;

    #[test]
    fn parses_and_renders_month_keys() {
        let month = YearMonth::parse("2024-05").expect("month key should parse");
        assert_eq!(month, YearMonth { year: 2024, month: 5 });
        assert_eq!(month.to_string(), "2024-05");
    }

    #[test]
    fn rejects_malformed_month_keys() {
        assert!(YearMonth::parse("2024-5").is_none());
        assert!(YearMonth::parse("2024-13").is_none());
        assert!(YearMonth::parse("2024-00").is_none());
        assert!(YearMonth::parse("may 2024").is_none());
        assert!(YearMonth::parse("").is_none());
    }

    #[test]
    fn ordering_is_chronological() {
        let earlier = YearMonth { year: 2023, month: 12 };
        let later = YearMonth { year: 2024, month: 1 };
        assert!(earlier < later);
    }

    #[test]
    fn parses_rfc3339_instants() {
        let instant = parse_visit_instant("2024-05-15T09:00:00+09:00")
            .expect("rfc3339 instant should parse");
        assert_eq!(instant.year(), 2024);
    }

    #[test]
    fn parses_date_only_input_as_local_midnight() {
        let instant = parse_visit_instant("2024-05-15").expect("date-only input should parse");
        assert_eq!(instant.month(), 5);
        assert_eq!(instant.day(), 15);
    }

    #[test]
    fn rejects_unparseable_instants() {
        assert!(parse_visit_instant("").is_none());
        assert!(parse_visit_instant("someday").is_none());
        assert!(parse_visit_instant("2024/05/15").is_none());
    }
}
