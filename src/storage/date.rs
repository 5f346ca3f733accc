//! Arrival date reconstruction
//!
//! Bookings carry their arrival date as three independent fields: a year, a
//! month name and a day of month. This module combines them into a
//! `NaiveDate`, validating every combination rather than trusting any one
//! field on its own.

use chrono::NaiveDate;

/// Full English month names, indexed by `month - 1`
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Map a month to its ordinal (1-12)
///
/// Accepts the case-sensitive full month name ("July") or a numeric
/// ordinal ("7", "07"). Anything else is rejected.
pub fn month_ordinal(month: &str) -> Option<u32> {
    let month = month.trim();

    if let Some(idx) = MONTH_NAMES.iter().position(|name| *name == month) {
        return Some(idx as u32 + 1);
    }

    match month.parse::<u32>() {
        Ok(n) if (1..=12).contains(&n) => Some(n),
        _ => None,
    }
}

/// Parse a four-digit calendar year
pub fn parse_year(year: &str) -> Option<i32> {
    let year = year.trim();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}

/// Parse a numeric day-of-month value
///
/// Only checks that the value is a number. Whether the day exists in its
/// month is left to `reconstruct`.
pub fn parse_day_of_month(day: &str) -> Option<u32> {
    day.trim().parse().ok()
}

/// Combine year, month and day into a calendar date
///
/// Returns `None` when the month is unrecognized or the day does not exist
/// in that month (leap years included). Never panics.
pub fn reconstruct(year: i32, month: &str, day: u32) -> Option<NaiveDate> {
    let month = month_ordinal(month)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Reconstruct from the raw string fields of a row
pub fn reconstruct_from_fields(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    reconstruct(parse_year(year)?, month, parse_day_of_month(day)?)
}
