//! Quote page scraper.
//!
//! Crawls a paginated quotes site, one page at a time, extracting one
//! [`Quote`] per quote block and following the "next page" link until the
//! last page. The reference site is [quotes.toscrape.com](https://quotes.toscrape.com).
//!
//! # Page Structure
//!
//! Each page carries a list of `div.quote` blocks; inside each block the
//! quote body is a `span.text`, the attribution a `small.author`, and the
//! tag labels `a.tag` anchors inside a `div.tags` container. Pagination is a
//! `li.next > a` anchor whose relative `href` is resolved against the
//! configured base URL.
//!
//! # Malformed Input
//!
//! The parser is permissive: bytes that are not HTML degrade to a document
//! with zero quote blocks and no next link, which ends the crawl cleanly. A
//! quote block missing its body or author is a [`ScrapeError::MalformedRecord`]
//! and aborts the run, unless the skip-malformed policy is enabled.

use crate::config::CrawlConfig;
use crate::errors::ScrapeError;
use crate::fetch::PageFetcher;
use crate::models::Quote;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

static QUOTE_BLOCK: Lazy<Selector> = Lazy::new(|| Selector::parse("div.quote").unwrap());
static QUOTE_TEXT: Lazy<Selector> = Lazy::new(|| Selector::parse("span.text").unwrap());
static QUOTE_AUTHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("small.author").unwrap());
static QUOTE_TAG: Lazy<Selector> = Lazy::new(|| Selector::parse("div.tags a.tag").unwrap());
static NEXT_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("li.next > a").unwrap());

/// Crawl every page reachable from the configured base URL and return the
/// extracted quotes.
///
/// Pages are fetched strictly in sequence: each fetch depends on the `href`
/// extracted from the previous page. Record order is preserved across the
/// whole crawl (earlier pages first, document order within a page).
///
/// The crawl stops when a page has no next link, or when
/// [`CrawlConfig::max_pages`] pages have been fetched (logged as a warning,
/// not an error).
///
/// # Errors
///
/// Returns [`ScrapeError::Network`] if any page fetch fails,
/// [`ScrapeError::MalformedRecord`] if a quote block is missing a required
/// sub-element (unless `skip_malformed` is set), or
/// [`ScrapeError::InvalidUrl`] if a pagination `href` cannot be resolved.
#[instrument(level = "info", skip_all, fields(base_url = %config.base_url))]
pub async fn crawl_quotes<F: PageFetcher>(
    fetcher: &F,
    config: &CrawlConfig,
) -> Result<Vec<Quote>, ScrapeError> {
    let mut quotes = Vec::new();
    let mut next_url = Some(config.base_url.clone());
    let mut pages_fetched = 0usize;

    while let Some(url) = next_url.take() {
        if pages_fetched >= config.max_pages {
            warn!(
                max_pages = config.max_pages,
                "Page ceiling reached; stopping crawl"
            );
            break;
        }

        let body = fetcher.fetch_page(&url).await?;
        pages_fetched += 1;

        let document = Html::parse_document(&body);
        let before = quotes.len();
        collect_page_quotes(&document, &url, config.skip_malformed, &mut quotes)?;
        debug!(%url, quote_count = quotes.len() - before, "Extracted quote blocks");

        next_url = match next_page_href(&document) {
            Some(href) => Some(config.base_url.join(&href)?),
            None => None,
        };
    }

    info!(
        pages = pages_fetched,
        count = quotes.len(),
        "Crawl finished"
    );
    Ok(quotes)
}

/// Extract every quote block on a page, in document order, appending to `out`.
///
/// With `skip_malformed` set, a block missing a required field is logged and
/// dropped instead of failing the whole crawl.
fn collect_page_quotes(
    document: &Html,
    page_url: &Url,
    skip_malformed: bool,
    out: &mut Vec<Quote>,
) -> Result<(), ScrapeError> {
    for (index, block) in document.select(&QUOTE_BLOCK).enumerate() {
        match parse_quote_block(block) {
            Ok(quote) => out.push(quote),
            Err(e) if skip_malformed => {
                warn!(page = %page_url, index, error = %e, "Skipping malformed quote block");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Extract one [`Quote`] from a quote block.
///
/// The body and author sub-elements are mandatory; a missing or empty one is
/// a [`ScrapeError::MalformedRecord`]. An absent or empty tags container
/// yields an empty tag list.
fn parse_quote_block(block: ElementRef<'_>) -> Result<Quote, ScrapeError> {
    let text = required_text(block, &QUOTE_TEXT, "text")?;
    let author = required_text(block, &QUOTE_AUTHOR, "author")?;
    let tags = block.select(&QUOTE_TAG).map(element_text).collect();

    Ok(Quote { text, author, tags })
}

/// The `href` of the page's next-link anchor, if present.
fn next_page_href(document: &Html) -> Option<String> {
    document
        .select(&NEXT_LINK)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
}

/// Text content of the first match of `selector` within `block`; missing and
/// empty are both malformed.
fn required_text(
    block: ElementRef<'_>,
    selector: &Selector,
    field: &'static str,
) -> Result<String, ScrapeError> {
    let value = block
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default();
    if value.is_empty() {
        return Err(ScrapeError::MalformedRecord { field });
    }
    Ok(value)
}

/// Concatenated text of an element and its descendants.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
