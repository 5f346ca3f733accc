//! Record normalization
//!
//! Turns a `RawRow` of strings into a typed `BookingRecord`. Normalization is
//! total: missing or malformed counts become 0, a missing country becomes
//! `"Unknown"`, and unrecognized columns pass through untouched.

use crate::storage::date;
use crate::storage::types::{
    BookingRecord, RawRow, FIELD_ADULTS, FIELD_CHILDREN, FIELD_COUNTRY, FIELD_DAY, FIELD_MONTH,
    FIELD_YEAR, UNKNOWN_COUNTRY,
};

/// Coerce a guest count to a non-negative integer
///
/// Whole numbers parse directly. Decimal forms such as "2.0" (common in
/// exported spreadsheets) are accepted when finite and non-negative and are
/// truncated. Everything else, including absence, counts as 0.
pub fn coerce_count(value: Option<&str>) -> u32 {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return 0;
    };

    if let Ok(n) = value.parse::<u32>() {
        return n;
    }

    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f <= u32::MAX as f64 => f as u32,
        _ => 0,
    }
}

/// Normalize a country value, substituting the sentinel when empty
pub fn normalize_country(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => UNKNOWN_COUNTRY.to_string(),
    }
}

/// Normalize one raw row into a booking record
pub fn normalize(row: RawRow) -> BookingRecord {
    let mut fields = row.into_fields();

    let arrival_year = fields.remove(FIELD_YEAR).unwrap_or_default();
    let arrival_month = fields.remove(FIELD_MONTH).unwrap_or_default();
    let arrival_day_of_month = fields.remove(FIELD_DAY).unwrap_or_default();

    let arrival_date =
        date::reconstruct_from_fields(&arrival_year, &arrival_month, &arrival_day_of_month);

    let adults = coerce_count(fields.remove(FIELD_ADULTS).as_deref());
    let children = coerce_count(fields.remove(FIELD_CHILDREN).as_deref());
    let country = normalize_country(fields.remove(FIELD_COUNTRY).as_deref());

    BookingRecord {
        arrival_year,
        arrival_month,
        arrival_day_of_month,
        adults,
        children,
        country,
        extra: fields,
        arrival_date,
    }
}
