//! Site scrapers.
//!
//! One submodule per scraped site. Each scraper owns the structural selectors
//! for its site's markup and exposes a single crawl entry point that walks
//! the site's pagination and returns extracted records in page order.
//!
//! Scrapers use:
//! - A [`PageFetcher`](crate::fetch::PageFetcher) for page retrieval, so the
//!   crawl logic never touches the network directly
//! - Graceful degradation on unparseable markup (zero records, no next link)
//! - Structured logging per page fetched and per block skipped

pub mod quotes;
