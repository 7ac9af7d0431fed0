//! Crawl configuration.
//!
//! The base URL is runtime data handed to the pipeline at construction time,
//! not a compile-time constant, so tests can point the crawler at fixture
//! pages and the CLI can point it at a different deployment of the site.

use url::Url;

/// Configuration for one crawl run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// First page of the crawl; relative pagination `href`s are resolved
    /// against this URL.
    pub base_url: Url,

    /// Maximum number of pages to fetch before stopping. Guards against
    /// pagination link cycles and unbounded crawls.
    pub max_pages: usize,

    /// Skip quote blocks with missing required fields instead of aborting
    /// the whole run.
    pub skip_malformed: bool,
}

impl CrawlConfig {
    /// Create a configuration with default limits for the given start URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            max_pages: default_max_pages(),
            skip_malformed: false,
        }
    }

    /// Set the page ceiling.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the malformed-block policy.
    pub fn with_skip_malformed(mut self, skip_malformed: bool) -> Self {
        self.skip_malformed = skip_malformed;
        self
    }
}

/// Default page ceiling. The reference site has 10 pages; 50 leaves headroom
/// while still bounding a link cycle.
fn default_max_pages() -> usize {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::new(Url::parse("https://example.test/").unwrap());
        assert_eq!(config.max_pages, 50);
        assert!(!config.skip_malformed);
    }

    #[test]
    fn test_builder_overrides() {
        let config = CrawlConfig::new(Url::parse("https://example.test/").unwrap())
            .with_max_pages(3)
            .with_skip_malformed(true);
        assert_eq!(config.max_pages, 3);
        assert!(config.skip_malformed);
    }
}
