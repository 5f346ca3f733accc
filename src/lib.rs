//! # Hotel Bookings
//!
//! Loads a fixed set of hotel booking records once at startup and serves
//! them over HTTP, together with visitor statistics for a chosen arrival
//! date range.
//!
//! ## Modules
//!
//! - [`storage`]: Record normalization, arrival date reconstruction, the in-memory store
//! - [`query`]: Date range filtering and chart aggregates
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hotel_bookings::query::{Dashboard, DateRange};
//! use hotel_bookings::storage::BookingStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // One-shot bulk load
//!     let store = BookingStore::load_csv("./hotel_bookings_1000.csv")?;
//!
//!     // Filter by arrival date (inclusive on both ends)
//!     let range = DateRange::parse(Some("2015-07-01"), Some("2015-07-31"))?;
//!     let matched = store.in_range(&range);
//!
//!     // Aggregate for charting
//!     let dashboard = Dashboard::compute(&matched);
//!     for day in &dashboard.visitors_per_day {
//!         println!("day {}: {} visitors", day.date, day.total);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod query;
pub mod storage;

// Re-export top-level types for convenience
pub use storage::{BookingRecord, BookingStore, LoadStats, RawRow, StoreError, StoreResult};

pub use query::{
    CountryVisitors, DailyVisitors, Dashboard, DateRange, QueryError, QueryResult, SeriesPoint,
    StatEntry,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DataConfig, LoggingConfig};
