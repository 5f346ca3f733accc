//! Hotel Bookings API Server
//!
//! Run with: cargo run --bin hotel-bookings
//!
//! # Configuration
//!
//! Read from `config.toml` (see `hotel-bookings-cli config`), then overridden by:
//! - `BOOKINGS_CSV_PATH`: Booking CSV loaded at startup (default: ./hotel_bookings_1000.csv)
//! - `BOOKINGS_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `BOOKINGS_API_PORT`: Port to listen on (default: 5000)
//! - `BOOKINGS_LOG_LEVEL`: Log level when `RUST_LOG` is unset (default: info)
//! - `BOOKINGS_LOG_FORMAT`: `pretty` or `json` (default: pretty)

use anyhow::Context;
use hotel_bookings::api::{serve, AppState};
use hotel_bookings::config::{Config, LoggingConfig};
use hotel_bookings::storage::BookingStore;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting Hotel Bookings server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Booking source: {}", config.data.csv_path);

    // The server is not started until the bulk load has completed
    let csv_path = config.data.csv_path.clone();
    let store = tokio::task::spawn_blocking(move || BookingStore::load_csv(&csv_path))
        .await
        .context("bulk load task panicked")?
        .with_context(|| format!("failed to load bookings from {}", config.data.csv_path))?;

    let stats = store.stats();
    if stats.invalid_dates > 0 {
        tracing::warn!(
            "{} bookings have no valid arrival date and will never match a date range",
            stats.invalid_dates
        );
    }

    let state = AppState::new(Arc::new(store), config.api.clone());
    serve(state, &config.api).await?;

    tracing::info!("Hotel Bookings server stopped");
    Ok(())
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("hotel_bookings={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
