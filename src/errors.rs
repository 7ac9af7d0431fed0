//! Error types for the scraping pipeline.
//!
//! Every fallible stage of the pipeline (fetch, extract, write) reports a
//! variant of [`ScrapeError`]. Nothing is recovered locally: errors propagate
//! with `?` up to `main`, which logs a diagnostic and exits non-zero. The one
//! exception is the explicit `--skip-malformed` policy, which downgrades
//! [`ScrapeError::MalformedRecord`] to a warning per skipped block.

use thiserror::Error;

/// Errors that can occur while crawling pages or writing output.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// An HTTP request failed: connection error, timeout, or a non-2xx
    /// status from the server.
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// A quote block was missing (or had an empty) required sub-element.
    #[error("quote block missing required `{field}` element")]
    MalformedRecord { field: &'static str },

    /// Writing the output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a record row failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The base URL or a pagination `href` could not be parsed/resolved.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
