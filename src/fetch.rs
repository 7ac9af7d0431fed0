//! Page fetching.
//!
//! [`PageFetcher`] is the one seam in the pipeline that knows how bytes come
//! off the network. Everything downstream (parsing, extraction, pagination,
//! output) is generic over it, so the crawl logic is agnostic to whether
//! fetches block, suspend, or are served from in-memory fixtures in tests.

use crate::errors::ScrapeError;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Retrieves the body of a page by absolute URL.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Fetch one page and return its body as text.
    async fn fetch_page(&self, url: &Url) -> Result<String, ScrapeError>;
}

/// HTTP implementation of [`PageFetcher`] over a shared [`reqwest::Client`].
///
/// One GET per page, no retries, redirects handled by the client's default
/// policy. Any non-2xx status is reported as [`ScrapeError::Network`].
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build the fetcher with a request timeout and a crate user agent.
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("quote_scraper/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &Url) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        debug!(%url, bytes = body.len(), "Fetched page");
        Ok(body)
    }
}
