//! Core data types for booking storage
//!
//! This module defines the fundamental types used throughout the storage layer:
//! - `RawRow`: One untyped row as it arrives from the bulk source
//! - `BookingRecord`: A normalized, immutable booking
//! - Field name constants shared by the normalizer and the CSV loader

use crate::storage::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Source column holding the four-digit arrival year
pub const FIELD_YEAR: &str = "arrival_date_year";
/// Source column holding the arrival month name (e.g. "July")
pub const FIELD_MONTH: &str = "arrival_date_month";
/// Source column holding the arrival day of month
pub const FIELD_DAY: &str = "arrival_date_day_of_month";
/// Source column holding the adult count
pub const FIELD_ADULTS: &str = "adults";
/// Source column holding the child count
pub const FIELD_CHILDREN: &str = "children";
/// Source column holding the guest country code
pub const FIELD_COUNTRY: &str = "country";

/// Country used when a row has no country value
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// A raw row of string fields, keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: BTreeMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set a field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a field value, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A single normalized booking
///
/// Created once per ingested row and never mutated afterwards. Serializes
/// back to the flat, source-shaped object consumers expect: the semantic
/// fields under their original column names plus every passthrough column.
///
/// The three arrival fields keep the source text, so a row whose date does
/// not parse still lists exactly as it was loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRecord {
    /// Arrival year as given by the source
    #[serde(rename = "arrival_date_year", default)]
    pub arrival_year: String,
    /// Arrival month as given by the source (a full month name)
    #[serde(rename = "arrival_date_month", default)]
    pub arrival_month: String,
    /// Arrival day of month as given by the source
    #[serde(rename = "arrival_date_day_of_month", default)]
    pub arrival_day_of_month: String,
    /// Number of adults (0 when absent or non-numeric)
    pub adults: u32,
    /// Number of children (0 when absent or non-numeric)
    pub children: u32,
    /// Country code, never empty
    pub country: String,
    /// All other source columns, passed through unmodified
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
    /// Reconstructed arrival date, `None` if the three date fields are invalid
    #[serde(skip)]
    pub arrival_date: Option<NaiveDate>,
}

impl BookingRecord {
    /// Total guests on this booking
    pub fn visitors(&self) -> u64 {
        u64::from(self.adults) + u64::from(self.children)
    }

    /// Numeric day of month, `None` when absent or non-numeric
    ///
    /// Not checked against the month: "32" yields `Some(32)`.
    pub fn day_of_month(&self) -> Option<u32> {
        date::parse_day_of_month(&self.arrival_day_of_month)
    }

    /// Whether the arrival date could be reconstructed
    pub fn has_valid_arrival(&self) -> bool {
        self.arrival_date.is_some()
    }

    /// Look up a passthrough field
    pub fn extra_field(&self, name: &str) -> Option<&str> {
        self.extra.get(name).map(String::as_str)
    }
}
