use std::str::FromStr;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

mod config;
mod core;
mod models;
mod utils;

use crate::core::export;
use crate::core::scrape::{self, CountryLookup, DetailFetcher};

#[tokio::main]
async fn main() {
    let config = config::Config::init().expect("Failed to initialize configuration");
    if let Err(e) = init_logging(&config) {
        eprintln!("Failed to initialize logging: {e}");
        return;
    }

    let listing = match scrape::load_listing(&config.scrape.listing_path) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(
                "Error reading listing file '{}': {e}",
                config.scrape.listing_path
            );
            return;
        }
    };

    let fragments = scrape::locate_entries(&listing);
    if fragments.is_empty() {
        tracing::warn!("No movie data was extracted");
        return;
    }

    let lookup = build_country_lookup(&config);
    let records = scrape::extract_all(fragments, lookup, config.scrape.workers).await;
    if records.is_empty() {
        tracing::warn!("No movie data was extracted");
        return;
    }

    if let Err(e) = export_records(&records, &config) {
        tracing::error!("Export failed: {e}");
    }
}

fn init_logging(config: &config::Config) -> utils::Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.logs.file)?;
    let level = Level::from_str(&config.logs.level).unwrap_or(Level::INFO);

    // Same stream to the console and the log file.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(LevelFilter::from_level(level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(log_file))
                .with_filter(LevelFilter::from_level(level)),
        )
        .init();
    Ok(())
}

/// Detail-page lookups are optional; a configuration problem disables
/// them for the run instead of aborting it.
fn build_country_lookup(config: &config::Config) -> Option<Arc<dyn CountryLookup>> {
    if !config.scrape.fetch_details {
        return None;
    }

    match DetailFetcher::from_config(&config.http) {
        Ok(fetcher) => Some(Arc::new(fetcher)),
        Err(e) => {
            tracing::error!("Detail fetcher configuration error: {e}");
            None
        }
    }
}

fn export_records(records: &[models::MovieRecord], config: &config::Config) -> utils::Result<()> {
    export::write_csv(&config.export.csv_path, records)?;
    tracing::info!("Successfully saved {} movies to CSV file", records.len());

    if config.export.write_xlsx {
        export::write_xlsx(&config.export.xlsx_path, records)?;
        tracing::info!("Successfully saved {} movies to XLSX file", records.len());
    }
    Ok(())
}
