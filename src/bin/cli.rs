//! Hotel Bookings CLI
//!
//! Command-line interface for operators:
//! - Summarize a booking CSV offline
//! - Query a running server for bookings or stats
//! - Check server status
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use hotel_bookings::api::dto::HealthResponse;
use hotel_bookings::api::error::ErrorResponse;
use hotel_bookings::config::generate_default_config;
use hotel_bookings::query::{Dashboard, DateRange};
use hotel_bookings::storage::{BookingRecord, BookingStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hotel-bookings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hotel booking visitor statistics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:5000", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a CSV locally and print visitor statistics
    Summary {
        /// Path to the bookings CSV
        #[arg(long)]
        file: PathBuf,
        /// First arrival day, inclusive (YYYY-MM-DD)
        #[arg(short, long, requires = "end")]
        start: Option<String>,
        /// Last arrival day, inclusive (YYYY-MM-DD)
        #[arg(short, long, requires = "start")]
        end: Option<String>,
    },

    /// List bookings arriving in a date range (from the server)
    Bookings {
        #[arg(short, long)]
        start: String,
        #[arg(short, long)]
        end: String,
    },

    /// Fetch visitor statistics for a date range (from the server)
    Stats {
        #[arg(short, long)]
        start: String,
        #[arg(short, long)]
        end: String,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Summary { file, start, end } => {
            let store = BookingStore::load_csv(&file)
                .with_context(|| format!("failed to load {}", file.display()))?;

            let records: Vec<&BookingRecord> = match (start.as_deref(), end.as_deref()) {
                (Some(_), Some(_)) => {
                    let range = DateRange::parse(start.as_deref(), end.as_deref())
                        .with_context(|| format!("bad range {:?}..{:?}", start, end))?;
                    store.in_range(&range)
                }
                _ => store.all().iter().collect(),
            };

            let stats = store.stats();
            if cli.format != "json" {
                println!(
                    "Loaded {} bookings ({} without a valid arrival date, {} unreadable rows)",
                    stats.rows_loaded, stats.invalid_dates, stats.rows_skipped
                );
                println!();
            }

            print_dashboard(&Dashboard::compute(&records), &cli.format)?;
        }

        Commands::Bookings { start, end } => {
            let response = client
                .get(format!("{}/api/bookings/daterange", cli.api_url))
                .query(&[("startDate", &start), ("endDate", &end)])
                .send()
                .await?;

            if !response.status().is_success() {
                report_api_error(response).await;
                std::process::exit(1);
            }

            let bookings: Vec<BookingRecord> = response.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&bookings)?);
            } else {
                print_bookings(&bookings);
            }
        }

        Commands::Stats { start, end } => {
            let response = client
                .get(format!("{}/api/bookings/stats", cli.api_url))
                .query(&[("startDate", &start), ("endDate", &end)])
                .send()
                .await?;

            if !response.status().is_success() {
                report_api_error(response).await;
                std::process::exit(1);
            }

            let dashboard: Dashboard = response.json().await?;
            print_dashboard(&dashboard, &cli.format)?;
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: HealthResponse = resp.json().await?;

                    println!("Hotel Bookings v{}", health.version);
                    println!();
                    println!("API Status: {}", health.status);
                    println!("Bookings:   {}", health.bookings);
                    println!("Invalid arrival dates: {}", health.invalid_dates);
                    println!("Unreadable rows:       {}", health.rows_skipped);
                    println!();
                    println!("Uptime: {}", format_duration(health.uptime_seconds));
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Hotel Bookings API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin hotel-bookings");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Print the server's error message
async fn report_api_error(response: reqwest::Response) {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(err) => eprintln!("Request failed ({}): {}", status, err.error.message),
        Err(_) => eprintln!("Request failed ({}): {}", status, text),
    }
}

fn print_dashboard(dashboard: &Dashboard, format: &str) -> anyhow::Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(dashboard)?);
        return Ok(());
    }

    println!("Bookings in range: {}", dashboard.booking_count);
    for entry in &dashboard.visitor_stats {
        println!("  {:<10} {}", entry.name, entry.value);
    }

    println!();
    println!("Visitors per day");
    println!("{:<6} {:>8} {:>10} {:>8}", "Day", "Adults", "Children", "Total");
    println!("{}", "-".repeat(35));
    for day in &dashboard.visitors_per_day {
        println!(
            "{:<6} {:>8} {:>10} {:>8}",
            day.date, day.adults, day.children, day.total
        );
    }

    println!();
    println!("Top countries");
    println!("{:<10} {:>8}", "Country", "Visitors");
    println!("{}", "-".repeat(19));
    for country in &dashboard.visitors_by_country {
        println!("{:<10} {:>8}", country.country(), country.total());
    }

    Ok(())
}

fn print_bookings(bookings: &[BookingRecord]) {
    if bookings.is_empty() {
        println!("No bookings in range.");
        return;
    }

    println!(
        "{:<6} {:<10} {:<4} {:<10} {:>7} {:>9}",
        "Year", "Month", "Day", "Country", "Adults", "Children"
    );
    println!("{}", "-".repeat(51));

    for b in bookings {
        println!(
            "{:<6} {:<10} {:<4} {:<10} {:>7} {:>9}",
            b.arrival_year,
            b.arrival_month,
            b.arrival_day_of_month,
            b.country,
            b.adults,
            b.children
        );
    }

    println!();
    println!("{} bookings", bookings.len());
}

fn format_duration(secs: u64) -> String {
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let minutes = (secs % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m {}s", minutes, secs % 60)
    }
}
