//! Data model for extracted quotes.
//!
//! The crawl produces exactly one kind of record: a [`Quote`], built once per
//! quote block encountered on a page and never mutated afterwards. Records
//! accumulate in a `Vec<Quote>` across pages (earlier pages first, document
//! order within a page) and are consumed once by the CSV writer at the end of
//! the run.

/// One quote as extracted from a page.
///
/// Field declaration order (`text`, `author`, `tags`) is the serialization
/// order and matches the CSV header row.
///
/// # Fields
///
/// * `text` - The quoted content, never empty
/// * `author` - The attributed author name, never empty
/// * `tags` - Tag labels in document order; may be empty, duplicates allowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The quoted content.
    pub text: String,
    /// The attributed author name.
    pub author: String,
    /// Tag labels in the order they appear on the page.
    pub tags: Vec<String>,
}
