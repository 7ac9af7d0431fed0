//! CSV output for extracted quotes.
//!
//! One header row (`text,author,tags`), then one row per quote in crawl
//! order. Tags are a single field, joined with `;`; an empty tag list is an
//! empty field. Splitting a non-empty field on `;` recovers the tag list.
//!
//! The file is written to a `.tmp` sibling and renamed into place only after
//! a successful flush, so a failed run never leaves a truncated file at the
//! destination.

use crate::errors::ScrapeError;
use crate::models::Quote;
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Separator for the serialized tags field.
const TAG_SEPARATOR: &str = ";";

/// One output row. Field declaration order is the column order and the
/// header row.
#[derive(Debug, Serialize)]
struct QuoteRow<'a> {
    text: &'a str,
    author: &'a str,
    tags: String,
}

/// Write all quotes to a CSV file at `path`.
///
/// # Arguments
///
/// * `path` - Destination file; existing content is replaced on success
/// * `quotes` - Records in final output order
///
/// # Errors
///
/// [`ScrapeError::Io`] if the destination cannot be opened, written, or
/// renamed into place, [`ScrapeError::Csv`] if a row fails to serialize. On
/// any error the temporary file is removed and the destination is left as it
/// was.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn write_quotes(path: &Path, quotes: &[Quote]) -> Result<(), ScrapeError> {
    let tmp = tmp_path(path);
    match write_rows(&tmp, quotes) {
        Ok(()) => {
            fs::rename(&tmp, path)?;
            info!(rows = quotes.len(), "Wrote CSV output");
            Ok(())
        }
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

fn write_rows(path: &Path, quotes: &[Quote]) -> Result<(), ScrapeError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    // Explicit header so an empty crawl still produces a well-formed file.
    writer.write_record(["text", "author", "tags"])?;
    for quote in quotes {
        writer.serialize(QuoteRow {
            text: &quote.text,
            author: &quote.author,
            tags: join_tags(&quote.tags),
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn join_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR)
}

/// Temporary sibling path: `quotes.csv` -> `quotes.csv.tmp`.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("out"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct RawRow {
        text: String,
        author: String,
        tags: String,
    }

    fn split_tags(field: &str) -> Vec<String> {
        if field.is_empty() {
            Vec::new()
        } else {
            field.split(TAG_SEPARATOR).map(str::to_string).collect()
        }
    }

    fn read_rows(path: &Path) -> Vec<RawRow> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        reader
            .deserialize()
            .collect::<Result<Vec<RawRow>, _>>()
            .unwrap()
    }

    fn quote(text: &str, author: &str, tags: &[&str]) -> Quote {
        Quote {
            text: text.to_string(),
            author: author.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        let quotes = vec![
            quote("“Commas, and \"quotes\".”", "A. Author", &["a", "b"]),
            quote("line one\nline two", "B. Author", &[]),
        ];

        write_quotes(&path, &quotes).unwrap();
        let rows = read_rows(&path);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, "“Commas, and \"quotes\".”");
        assert_eq!(rows[0].author, "A. Author");
        assert_eq!(split_tags(&rows[0].tags), vec!["a", "b"]);
        assert_eq!(rows[1].text, "line one\nline two");
        assert!(split_tags(&rows[1].tags).is_empty());
    }

    #[test]
    fn test_header_row_comes_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");

        write_quotes(&path, &[quote("t", "a", &["x"])]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().next(), Some("text,author,tags"));
    }

    #[test]
    fn test_empty_crawl_writes_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");

        write_quotes(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "text,author,tags\n");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");

        write_quotes(&path, &[quote("t", "a", &[])]).unwrap();

        assert!(path.exists());
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn test_failed_write_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("quotes.csv");

        let err = write_quotes(&path, &[quote("t", "a", &[])]).unwrap_err();

        assert!(matches!(err, ScrapeError::Csv(_) | ScrapeError::Io(_)));
        assert!(!path.exists());
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn test_tag_convention_is_symmetric() {
        let tags = vec!["one".to_string(), "two".to_string(), "one".to_string()];
        assert_eq!(split_tags(&join_tags(&tags)), tags);
        assert_eq!(join_tags(&[]), "");
        assert!(split_tags("").is_empty());
    }
}
