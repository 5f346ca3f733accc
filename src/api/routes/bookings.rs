//! Booking Routes
//!
//! Raw record listings.
//!
//! - GET / - Plain-text greeting
//! - GET /api/bookings - Every stored booking, in load order
//! - GET /api/bookings/daterange - Bookings arriving within a date range

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::RangeParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::DateRange;

/// GET /
pub async fn hello() -> &'static str {
    "Hello World"
}

/// GET /api/bookings
///
/// Unfiltered listing, including bookings whose arrival date is invalid.
pub async fn list_bookings(State(state): State<Arc<AppState>>) -> Response {
    Json(state.store.all()).into_response()
}

/// GET /api/bookings/daterange?startDate=YYYY-MM-DD&endDate=YYYY-MM-DD
///
/// Bookings whose arrival date lies within the inclusive range.
pub async fn bookings_in_range(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeParams>,
) -> ApiResult<Response> {
    let range = DateRange::parse(params.start_date.as_deref(), params.end_date.as_deref())?;

    let matched = state.store.in_range(&range);
    tracing::info!(range = %range, "Filtered {} bookings", matched.len());

    Ok(Json(matched).into_response())
}
