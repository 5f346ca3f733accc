//! Booking Queries
//!
//! Date-range filtering and the aggregate views built on top of it.
//!
//! # Query Pipeline
//!
//! ```text
//! (startDate, endDate) → DateRange → filter_by_arrival → Dashboard
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use hotel_bookings::query::{Dashboard, DateRange};
//! use hotel_bookings::storage::BookingStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = BookingStore::load_csv("./hotel_bookings_1000.csv")?;
//!     let range = DateRange::parse(Some("2015-07-01"), Some("2015-07-31"))?;
//!
//!     let matched = store.in_range(&range);
//!     let dashboard = Dashboard::compute(&matched);
//!     println!("{} bookings, top country: {:?}", matched.len(), dashboard.visitors_by_country.first());
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod error;
pub mod filter;

pub use aggregate::{
    adult_series, children_series, visitor_stats, visitors_by_country, visitors_per_day,
    CountryVisitors, DailyVisitors, Dashboard, SeriesPoint, StatEntry, TOP_COUNTRIES,
};
pub use error::{QueryError, QueryResult};
pub use filter::{filter_by_arrival, parse_bound, DateRange};
