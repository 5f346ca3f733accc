//! Stats Routes
//!
//! Chart-ready visitor aggregates for a date range.
//!
//! - GET /api/bookings/stats - All aggregate views at once

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::RangeParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::{Dashboard, DateRange};

/// GET /api/bookings/stats?startDate=YYYY-MM-DD&endDate=YYYY-MM-DD
///
/// Visitors per day, the adults/children summary, the top 10 countries and
/// the per-day adult and children series, all from the same filtered set.
pub async fn booking_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeParams>,
) -> ApiResult<Json<Dashboard>> {
    let range = DateRange::parse(params.start_date.as_deref(), params.end_date.as_deref())?;

    let matched = state.store.in_range(&range);
    let dashboard = Dashboard::compute(&matched);

    tracing::debug!(
        range = %range,
        bookings = dashboard.booking_count,
        days = dashboard.visitors_per_day.len(),
        countries = dashboard.visitors_by_country.len(),
        "Computed booking stats"
    );

    Ok(Json(dashboard))
}
