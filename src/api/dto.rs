//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! Bookings and aggregate views serialize directly from their domain types;
//! only request parameters and health documents live here.

use serde::{Deserialize, Serialize};

/// Date range query parameters (`?startDate=..&endDate=..`)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeParams {
    /// First arrival day, inclusive (YYYY-MM-DD)
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last arrival day, inclusive (YYYY-MM-DD)
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Full health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Bookings held in the store
    pub bookings: usize,
    /// Stored bookings without a valid arrival date
    pub invalid_dates: usize,
    /// Rows dropped by the CSV reader during the load
    pub rows_skipped: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
