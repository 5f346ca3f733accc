//! Hotel Bookings REST API
//!
//! HTTP API layer, built with Axum. Every handler reads from the booking
//! store loaded at startup; nothing is written after that.
//!
//! # Endpoints
//!
//! ## Bookings
//! - `GET /` - Plain-text greeting
//! - `GET /api/bookings` - All bookings
//! - `GET /api/bookings/daterange?startDate=..&endDate=..` - Bookings in range
//! - `GET /api/bookings/stats?startDate=..&endDate=..` - Chart aggregates for range
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use hotel_bookings::api::{serve, AppState};
//! use hotel_bookings::config::ApiConfig;
//! use hotel_bookings::storage::BookingStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(BookingStore::load_csv("./hotel_bookings_1000.csv")?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(store, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let api_routes = Router::new()
        .route("/bookings", get(routes::bookings::list_bookings))
        .route("/bookings/daterange", get(routes::bookings::bookings_in_range))
        .route("/bookings/stats", get(routes::stats::booking_stats));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::bookings::hello))
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS policy: permissive unless explicit origins are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ErrorResponse;
    use crate::query::Dashboard;
    use crate::storage::BookingStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    const SAMPLE: &str = "hotel,arrival_date_year,arrival_date_month,arrival_date_day_of_month,adults,children,country
Resort Hotel,2015,July,1,2,0,PRT
Resort Hotel,2015,July,15,2,1,GBR
City Hotel,2015,July,31,1,0,
City Hotel,2015,August,1,3,0,PRT
City Hotel,2015,Juli,5,2,2,ESP
City Hotel,15,July,32,1,0,FRA";

    fn create_test_app() -> Router {
        let store = BookingStore::from_reader(SAMPLE.as_bytes()).unwrap();
        let state = AppState::new(Arc::new(store), ApiConfig::default());
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_hello() {
        let response = get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Hello World");
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        for uri in ["/health/live", "/health/ready", "/health"] {
            let response = get(create_test_app(), uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_health_reports_store() {
        let response = get(create_test_app(), "/health").await;
        let health: serde_json::Value = body_json(response).await;

        assert_eq!(health["status"], "healthy");
        assert_eq!(health["bookings"], 6);
        assert_eq!(health["invalid_dates"], 2);
    }

    #[tokio::test]
    async fn test_list_all_bookings() {
        let response = get(create_test_app(), "/api/bookings").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bookings: Vec<serde_json::Value> = body_json(response).await;
        assert_eq!(bookings.len(), 6);
        assert_eq!(bookings[0]["hotel"], "Resort Hotel");
        assert_eq!(bookings[0]["arrival_date_year"], "2015");
        assert_eq!(bookings[2]["country"], "Unknown");
        // Invalid dates still appear in the unfiltered listing
        assert_eq!(bookings[4]["arrival_date_month"], "Juli");
    }

    #[tokio::test]
    async fn test_listing_keeps_unparsed_date_text() {
        let response = get(create_test_app(), "/api/bookings").await;
        let bookings: Vec<serde_json::Value> = body_json(response).await;

        let last = &bookings[5];
        assert_eq!(last["arrival_date_year"], "15");
        assert_eq!(last["arrival_date_month"], "July");
        assert_eq!(last["arrival_date_day_of_month"], "32");
        assert_eq!(last["country"], "FRA");
    }

    #[tokio::test]
    async fn test_daterange_inclusive() {
        let response = get(
            create_test_app(),
            "/api/bookings/daterange?startDate=2015-07-01&endDate=2015-07-31",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let bookings: Vec<serde_json::Value> = body_json(response).await;
        let days: Vec<&str> = bookings
            .iter()
            .map(|b| b["arrival_date_day_of_month"].as_str().unwrap())
            .collect();
        assert_eq!(days, vec!["1", "15", "31"]);
    }

    #[tokio::test]
    async fn test_daterange_inverted_is_empty() {
        let response = get(
            create_test_app(),
            "/api/bookings/daterange?startDate=2015-08-01&endDate=2015-07-01",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let bookings: Vec<serde_json::Value> = body_json(response).await;
        assert!(bookings.is_empty());
    }

    #[tokio::test]
    async fn test_daterange_missing_bound() {
        let response = get(create_test_app(), "/api/bookings/daterange?startDate=2015-07-01").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.error.code, "MISSING_BOUND");
        assert_eq!(error.error.message, "Start date and end date are required");
        assert!(!error.request_id.is_empty());
    }

    #[tokio::test]
    async fn test_daterange_malformed_bound() {
        let response = get(
            create_test_app(),
            "/api/bookings/daterange?startDate=2015-07-01&endDate=later",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.error.code, "MALFORMED_BOUND");
        assert_eq!(error.error.message, "Invalid date format");
    }

    #[tokio::test]
    async fn test_stats() {
        let response = get(
            create_test_app(),
            "/api/bookings/stats?startDate=2015-07-01&endDate=2015-08-31",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let dashboard: Dashboard = body_json(response).await;
        assert_eq!(dashboard.booking_count, 4);

        // July 1 and August 1 share the day-1 bucket
        let day_one = dashboard.visitors_per_day[0];
        assert_eq!(day_one.date, 1);
        assert_eq!(day_one.adults, 5);
        assert_eq!(day_one.total, 5);

        assert_eq!(dashboard.visitor_stats[0].value, 8);
        assert_eq!(dashboard.visitor_stats[1].value, 1);

        assert_eq!(dashboard.visitors_by_country[0].country(), "PRT");
        assert_eq!(dashboard.visitors_by_country[0].total(), 5);
        assert_eq!(dashboard.adult_series.len(), dashboard.visitors_per_day.len());
    }

    #[tokio::test]
    async fn test_stats_requires_bounds() {
        let response = get(create_test_app(), "/api/bookings/stats").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_configured_cors_origins() {
        let store = BookingStore::from_reader(SAMPLE.as_bytes()).unwrap();
        let mut config = ApiConfig::default();
        config.cors_origins = vec!["http://localhost:3000".to_string()];
        let app = build_router(AppState::new(Arc::new(store), config));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/bookings")
                    .header("Origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:3000"
        );
    }
}
