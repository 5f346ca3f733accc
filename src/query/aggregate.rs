//! Visitor Aggregation
//!
//! Pure, deterministic views over a sequence of bookings, shaped for charting:
//!
//! - **visitors per day**: adults / children / total grouped by day of month
//! - **visitor stats**: two-entry adults vs. children summary
//! - **visitors by country**: top 10 countries by total guests
//! - **adult / children series**: `(day, sum)` points derived from the daily view
//!
//! Nothing here is cached. Every call recomputes from its input, so results
//! always reflect the range that produced the input.
//!
//! # Day grouping
//!
//! Days are grouped by day-of-month number alone. Bookings arriving on
//! 5 July and 5 August share the day-5 bucket. Buckets appear in order of
//! first occurrence in the input.

use crate::storage::BookingRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of countries kept by [`visitors_by_country`]
pub const TOP_COUNTRIES: usize = 10;

/// Label of the adults entry in [`visitor_stats`]
pub const ADULTS_LABEL: &str = "Adults";
/// Label of the children entry in [`visitor_stats`]
pub const CHILDREN_LABEL: &str = "Children";

/// Guest totals for one day-of-month bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyVisitors {
    /// Day of month (1-31)
    pub date: u32,
    pub adults: u64,
    pub children: u64,
    /// `adults + children`
    pub total: u64,
}

/// One named category in the visitor summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub value: u64,
}

/// `(country, total visitors)`; serialized as a two-element array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryVisitors(pub String, pub u64);

impl CountryVisitors {
    pub fn country(&self) -> &str {
        &self.0
    }

    pub fn total(&self) -> u64 {
        self.1
    }
}

/// A single chart point: day of month against a count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: u32,
    pub y: u64,
}

/// Group guests by day of month
///
/// Records with no numeric day of month are skipped. Numeric days are
/// bucketed as-is, even when they do not exist in the arrival month.
pub fn visitors_per_day<'a, I>(records: I) -> Vec<DailyVisitors>
where
    I: IntoIterator<Item = &'a BookingRecord>,
{
    let mut buckets: Vec<DailyVisitors> = Vec::new();
    let mut index: HashMap<u32, usize> = HashMap::new();

    for record in records {
        let Some(day) = record.day_of_month() else {
            continue;
        };

        let idx = *index.entry(day).or_insert_with(|| {
            buckets.push(DailyVisitors {
                date: day,
                adults: 0,
                children: 0,
                total: 0,
            });
            buckets.len() - 1
        });

        let bucket = &mut buckets[idx];
        bucket.adults += u64::from(record.adults);
        bucket.children += u64::from(record.children);
        bucket.total = bucket.adults + bucket.children;
    }

    buckets
}

/// Total adults and total children across all records
pub fn visitor_stats<'a, I>(records: I) -> Vec<StatEntry>
where
    I: IntoIterator<Item = &'a BookingRecord>,
{
    let (adults, children) = records.into_iter().fold((0u64, 0u64), |(a, c), r| {
        (a + u64::from(r.adults), c + u64::from(r.children))
    });

    vec![
        StatEntry {
            name: ADULTS_LABEL.to_string(),
            value: adults,
        },
        StatEntry {
            name: CHILDREN_LABEL.to_string(),
            value: children,
        },
    ]
}

/// Top countries by total guests, descending
///
/// Ties keep first-seen order. At most [`TOP_COUNTRIES`] entries.
pub fn visitors_by_country<'a, I>(records: I) -> Vec<CountryVisitors>
where
    I: IntoIterator<Item = &'a BookingRecord>,
{
    let mut totals: Vec<CountryVisitors> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for record in records {
        let idx = *index.entry(record.country.as_str()).or_insert_with(|| {
            totals.push(CountryVisitors(record.country.clone(), 0));
            totals.len() - 1
        });
        totals[idx].1 += record.visitors();
    }

    // sort_by is stable
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals.truncate(TOP_COUNTRIES);
    totals
}

/// Adults per day bucket, in the same order as `days`
pub fn adult_series(days: &[DailyVisitors]) -> Vec<SeriesPoint> {
    days.iter()
        .map(|d| SeriesPoint {
            x: d.date,
            y: d.adults,
        })
        .collect()
}

/// Children per day bucket, in the same order as `days`
pub fn children_series(days: &[DailyVisitors]) -> Vec<SeriesPoint> {
    days.iter()
        .map(|d| SeriesPoint {
            x: d.date,
            y: d.children,
        })
        .collect()
}

/// Every chart view computed from one filtered record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Number of bookings the views were computed from
    pub booking_count: usize,
    pub visitors_per_day: Vec<DailyVisitors>,
    pub visitor_stats: Vec<StatEntry>,
    pub visitors_by_country: Vec<CountryVisitors>,
    pub adult_series: Vec<SeriesPoint>,
    pub children_series: Vec<SeriesPoint>,
}

impl Dashboard {
    pub fn compute(records: &[&BookingRecord]) -> Self {
        let days = visitors_per_day(records.iter().copied());

        Self {
            booking_count: records.len(),
            adult_series: adult_series(&days),
            children_series: children_series(&days),
            visitor_stats: visitor_stats(records.iter().copied()),
            visitors_by_country: visitors_by_country(records.iter().copied()),
            visitors_per_day: days,
        }
    }
}
