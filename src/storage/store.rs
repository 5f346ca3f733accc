//! Booking Store
//!
//! Owns the full, immutable collection of normalized bookings. The store is
//! populated exactly once by a bulk load and only exposes read-only views
//! afterwards, so it can be shared across request handlers behind an `Arc`
//! without any locking.
//!
//! # Load Path
//!
//! ```text
//! CSV → RawRow → normalize → BookingRecord → Vec (load order)
//! ```

use crate::query::filter::{filter_by_arrival, DateRange};
use crate::storage::error::{StoreError, StoreResult};
use crate::storage::normalize::normalize;
use crate::storage::types::{BookingRecord, RawRow};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

/// Counters recorded during the bulk load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows normalized into the store
    pub rows_loaded: usize,
    /// Rows the CSV reader could not decode
    pub rows_skipped: usize,
    /// Stored rows whose arrival date could not be reconstructed
    pub invalid_dates: usize,
}

impl std::fmt::Display for LoadStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "loaded={}, skipped={}, invalid_dates={}",
            self.rows_loaded, self.rows_skipped, self.invalid_dates
        )
    }
}

/// In-memory store of booking records
#[derive(Debug, Default)]
pub struct BookingStore {
    records: Vec<BookingRecord>,
    stats: LoadStats,
}

impl BookingStore {
    /// Build the store from raw rows, preserving their order
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawRow>,
    {
        Self::build(rows, 0)
    }

    fn build<I>(rows: I, rows_skipped: usize) -> Self
    where
        I: IntoIterator<Item = RawRow>,
    {
        let records: Vec<BookingRecord> = rows.into_iter().map(normalize).collect();
        let invalid_dates = records.iter().filter(|r| !r.has_valid_arrival()).count();

        let stats = LoadStats {
            rows_loaded: records.len(),
            rows_skipped,
            invalid_dates,
        };

        Self { records, stats }
    }

    /// Load from any CSV source with a header row
    ///
    /// Rows the CSV reader cannot decode are skipped and counted; they do
    /// not abort the load.
    pub fn from_reader<R: Read>(reader: R) -> StoreResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(String::is_empty) {
            return Err(StoreError::MissingHeader);
        }

        let mut rows = Vec::new();
        let mut rows_skipped = 0;

        for (line_num, result) in reader.records().enumerate() {
            match result {
                Ok(record) => {
                    rows.push(
                        headers
                            .iter()
                            .zip(record.iter())
                            .map(|(h, v)| (h.as_str(), v))
                            .collect::<RawRow>(),
                    );
                }
                Err(e) => {
                    // Header is line 1
                    tracing::debug!(line = line_num + 2, error = %e, "Skipping unreadable row");
                    rows_skipped += 1;
                }
            }
        }

        Ok(Self::build(rows, rows_skipped))
    }

    /// Load from a CSV file on disk
    pub fn load_csv(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let start = Instant::now();

        let file = File::open(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_reader(file)?;

        tracing::info!(
            path = ?path,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "CSV file successfully processed"
        );
        tracing::info!(
            rows_skipped = store.stats.rows_skipped,
            invalid_dates = store.stats.invalid_dates,
            "Loaded {} bookings",
            store.len()
        );

        Ok(store)
    }

    /// All records, in load order
    pub fn all(&self) -> &[BookingRecord] {
        &self.records
    }

    /// Records whose arrival date falls within `range`
    pub fn in_range(&self, range: &DateRange) -> Vec<&BookingRecord> {
        filter_by_arrival(&self.records, range)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counters from the bulk load
    pub fn stats(&self) -> LoadStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "hotel,arrival_date_year,arrival_date_month,arrival_date_day_of_month,adults,children,country
Resort Hotel,2015,July,1,2,0,PRT
Resort Hotel,2015,July,2,1,NA,GBR
City Hotel,2015,Juli,3,2,1,
City Hotel,2016,February,29,3,2,ESP";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_reader() {
        let store = BookingStore::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(store.len(), 4);
        assert_eq!(store.stats().rows_loaded, 4);
        assert_eq!(store.stats().rows_skipped, 0);
        assert_eq!(store.stats().invalid_dates, 1);

        let records = store.all();
        assert_eq!(records[0].country, "PRT");
        assert_eq!(records[0].extra_field("hotel"), Some("Resort Hotel"));
        assert_eq!(records[1].children, 0);
        assert_eq!(records[2].country, "Unknown");
        assert_eq!(records[3].arrival_date, Some(date(2016, 2, 29)));
    }

    #[test]
    fn test_invalid_dates_stay_in_store() {
        let store = BookingStore::from_reader(SAMPLE.as_bytes()).unwrap();
        let range = DateRange::new(date(2015, 1, 1), date(2016, 12, 31));

        assert_eq!(store.all().len(), 4);
        assert_eq!(store.in_range(&range).len(), 3);
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let csv = "arrival_date_year,arrival_date_month,arrival_date_day_of_month,adults
2015,July,5";
        let store = BookingStore::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].adults, 0);
        assert!(store.all()[0].has_valid_arrival());
    }

    #[test]
    fn test_empty_source_has_no_header() {
        let result = BookingStore::from_reader("".as_bytes());
        assert!(matches!(result, Err(StoreError::MissingHeader)));
    }

    #[test]
    fn test_load_csv_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let store = BookingStore::load_csv(file.path()).unwrap();
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let result = BookingStore::load_csv("/nonexistent/bookings.csv");
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_from_rows_preserves_order() {
        let rows = (1..=5).map(|d| {
            RawRow::new()
                .field("arrival_date_year", "2015")
                .field("arrival_date_month", "July")
                .field("arrival_date_day_of_month", d.to_string())
        });

        let store = BookingStore::from_rows(rows);
        let days: Vec<_> = store.all().iter().map(|r| r.day_of_month().unwrap()).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5]);
    }
}
