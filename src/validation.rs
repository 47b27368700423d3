//! Crawl data validation.
//!
//! Row-level sanity checks run before analysis. Findings are advisory: the
//! runner logs them and analyzes the crawl anyway.

use std::fmt;

use crate::config::MAX_URL_LENGTH;
use crate::models::CrawlRecord;

/// A problem found in the normalized crawl. Rows are numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// No rows survived ingestion and normalization
    EmptyDataset,
    /// The row has no address
    MissingUrl { row: usize },
    /// The address exceeds `MAX_URL_LENGTH`
    UrlTooLong { row: usize, length: usize },
    /// The address does not parse as an absolute URL
    InvalidUrl { row: usize, url: String },
    /// The address uses a scheme other than http or https
    UnsupportedScheme { row: usize, scheme: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyDataset => write!(f, "Empty data: no URLs to analyze"),
            ValidationIssue::MissingUrl { row } => write!(f, "Row {row}: Missing URL"),
            ValidationIssue::UrlTooLong { row, length } => write!(
                f,
                "Row {row}: URL exceeds maximum length ({length} > {MAX_URL_LENGTH})"
            ),
            ValidationIssue::InvalidUrl { row, url } => {
                write!(f, "Row {row}: Invalid URL: {url}")
            }
            ValidationIssue::UnsupportedScheme { row, scheme } => {
                write!(f, "Row {row}: Unsupported URL scheme: {scheme}")
            }
        }
    }
}

/// Checks every record's address.
pub fn validate_crawl_data(records: &[CrawlRecord]) -> Vec<ValidationIssue> {
    if records.is_empty() {
        return vec![ValidationIssue::EmptyDataset];
    }

    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| check_url(index + 1, &record.url))
        .collect()
}

/// True if `url` is an absolute http(s) URL within the length limit.
pub fn validate_url(url: &str) -> bool {
    check_url(0, url).is_none()
}

fn check_url(row: usize, url: &str) -> Option<ValidationIssue> {
    if url.trim().is_empty() {
        return Some(ValidationIssue::MissingUrl { row });
    }
    if url.len() > MAX_URL_LENGTH {
        return Some(ValidationIssue::UrlTooLong {
            row,
            length: url.len(),
        });
    }
    match url::Url::parse(url) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => None,
            other => Some(ValidationIssue::UnsupportedScheme {
                row,
                scheme: other.to_string(),
            }),
        },
        Err(_) => Some(ValidationIssue::InvalidUrl {
            row,
            url: url.to_string(),
        }),
    }
}
