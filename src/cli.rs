//! Command-line interface definitions for the quote scraper.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the quote scraper.
///
/// Options cover the output destination, the crawl origin, and the two
/// hardening knobs: a pagination ceiling and the malformed-block policy.
///
/// # Examples
///
/// ```sh
/// # Default crawl of the reference site into ./quotes.csv
/// quote_scraper
///
/// # Crawl a staging deployment, keep going past bad blocks
/// quote_scraper -b https://staging.example.test/ -o /tmp/quotes.csv --skip-malformed
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output CSV path
    #[arg(short, long, default_value = "quotes.csv")]
    pub out: String,

    /// First page of the crawl; pagination links are resolved against it
    #[arg(short, long, default_value = "https://quotes.toscrape.com/")]
    pub base_url: String,

    /// Maximum number of pages to fetch (guards against pagination link cycles)
    #[arg(long, default_value_t = 50)]
    pub max_pages: usize,

    /// Skip quote blocks missing required fields instead of aborting the run
    #[arg(long, default_value_t = false)]
    pub skip_malformed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(&["quote_scraper"]);

        assert_eq!(cli.out, "quotes.csv");
        assert_eq!(cli.base_url, "https://quotes.toscrape.com/");
        assert_eq!(cli.max_pages, 50);
        assert!(!cli.skip_malformed);
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(&[
            "quote_scraper",
            "--out",
            "/tmp/out.csv",
            "--base-url",
            "https://example.test/",
            "--max-pages",
            "5",
            "--skip-malformed",
        ]);

        assert_eq!(cli.out, "/tmp/out.csv");
        assert_eq!(cli.base_url, "https://example.test/");
        assert_eq!(cli.max_pages, 5);
        assert!(cli.skip_malformed);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(&["quote_scraper", "-o", "q.csv", "-b", "https://example.test/"]);

        assert_eq!(cli.out, "q.csv");
        assert_eq!(cli.base_url, "https://example.test/");
    }
}
