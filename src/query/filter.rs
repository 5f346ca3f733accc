//! Arrival date range filtering
//!
//! A `DateRange` is an inclusive `[start, end]` window of calendar days.
//! Filtering never fails: records without a valid arrival date simply do not
//! match, and an inverted range (`start > end`) matches nothing.

use crate::query::error::{QueryError, QueryResult};
use crate::storage::BookingRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day (inclusive)
    pub start: NaiveDate,
    /// Last day (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range. An inverted range is allowed and is empty.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Build a range from caller-supplied bound strings
    pub fn parse(start: Option<&str>, end: Option<&str>) -> QueryResult<Self> {
        let (Some(start), Some(end)) = (start, end) else {
            return Err(QueryError::MissingBound);
        };

        Ok(Self {
            start: parse_bound("startDate", start)?,
            end: parse_bound("endDate", end)?,
        })
    }

    /// Single-day range
    pub fn day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Check if a date falls within this range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when no date can match (`start > end`)
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days covered, 0 for an empty range
    pub fn num_days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Parse one caller-supplied bound into a calendar date
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`
/// forms. Time of day is discarded.
pub fn parse_bound(bound: &'static str, value: &str) -> QueryResult<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(QueryError::MissingBound);
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.date_naive());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(dt.date());
        }
    }

    Err(QueryError::MalformedBound {
        bound,
        value: value.to_string(),
    })
}

/// Select records whose arrival date falls within `range`
///
/// Returns borrowed views in input order; the source is never modified.
pub fn filter_by_arrival<'a, I>(records: I, range: &DateRange) -> Vec<&'a BookingRecord>
where
    I: IntoIterator<Item = &'a BookingRecord>,
{
    if range.is_empty() {
        return Vec::new();
    }

    records
        .into_iter()
        .filter(|r| r.arrival_date.is_some_and(|d| range.contains(d)))
        .collect()
}
