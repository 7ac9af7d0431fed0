//! # Quote Scraper
//!
//! A crawler that walks a paginated quotes site, extracts structured records
//! (quote text, author, tags) from every page, and writes the aggregated
//! records to a CSV file.
//!
//! ## Features
//!
//! - Follows the site's "next page" link until the last page, with a
//!   configurable page ceiling guarding against link cycles
//! - Degrades gracefully on unparseable markup (a bad page yields zero
//!   records rather than a crash)
//! - Optional skip-malformed policy to drop bad quote blocks instead of
//!   aborting the whole run
//! - Atomic output: the CSV is renamed into place only after a successful
//!   write, so a failed run never leaves a truncated file
//!
//! ## Usage
//!
//! ```sh
//! quote_scraper -o quotes.csv
//! ```
//!
//! ## Architecture
//!
//! A single sequential pipeline:
//! 1. **Fetch**: GET one page ([`fetch::HttpFetcher`])
//! 2. **Parse**: build the document tree and locate quote blocks
//! 3. **Extract**: read text/author/tags from each block
//! 4. **Paginate**: resolve the next-page link and loop until exhausted
//! 5. **Write**: serialize all records to CSV ([`outputs::csv`])

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use url::Url;

mod cli;
mod config;
mod errors;
mod fetch;
mod models;
mod outputs;
mod scrapers;

use cli::Cli;
use config::CrawlConfig;
use errors::ScrapeError;
use fetch::HttpFetcher;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("quote_scraper starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.out, ?args.base_url, ?args.max_pages, "Parsed CLI arguments");

    let base_url = match Url::parse(&args.base_url) {
        Ok(url) => url,
        Err(e) => {
            error!(base_url = %args.base_url, error = %e, "Base URL is not a valid absolute URL");
            return Err(ScrapeError::from(e).into());
        }
    };
    let config = CrawlConfig::new(base_url)
        .with_max_pages(args.max_pages)
        .with_skip_malformed(args.skip_malformed);

    // ---- Crawl ----
    let fetcher = HttpFetcher::new()?;
    let quotes = match scrapers::quotes::crawl_quotes(&fetcher, &config).await {
        Ok(quotes) => quotes,
        Err(e) => {
            error!(error = %e, "Crawl failed; no output written");
            return Err(e.into());
        }
    };
    info!(count = quotes.len(), "Crawl complete");

    // ---- CSV output ----
    if let Err(e) = outputs::csv::write_quotes(Path::new(&args.out), &quotes) {
        error!(path = %args.out, error = %e, "Failed to write CSV output");
        return Err(e.into());
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
