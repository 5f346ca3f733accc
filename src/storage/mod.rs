//! Booking Storage
//!
//! This module provides ingestion and ownership of booking records:
//!
//! - **types**: Core data structures (RawRow, BookingRecord)
//! - **date**: Arrival date reconstruction from year / month name / day
//! - **normalize**: Raw row to typed record conversion
//! - **store**: The in-memory store and its one-shot bulk load
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use hotel_bookings::storage::BookingStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = BookingStore::load_csv("./hotel_bookings_1000.csv")?;
//!     println!("Loaded {} bookings", store.len());
//!     Ok(())
//! }
//! ```

pub mod date;
pub mod error;
pub mod normalize;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use date::{month_ordinal, reconstruct, reconstruct_from_fields, MONTH_NAMES};
pub use error::{StoreError, StoreResult};
pub use normalize::{coerce_count, normalize, normalize_country};
pub use store::{BookingStore, LoadStats};
pub use types::{BookingRecord, RawRow, UNKNOWN_COUNTRY};
