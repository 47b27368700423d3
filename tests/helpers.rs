// Shared test helpers for building crawl exports.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

/// Header row of a typical crawl export, extra columns included.
#[allow(dead_code)] // Used by other test files
pub const HEADER: &str = "Address;Content Type;Status Code;Title 1;Meta Description 1;H1-1;Word Count;Canonical Link Element 1;Meta Robots 1;Schema.org Type;Inlinks";

/// A title inside the optimal 30-60 character range.
#[allow(dead_code)]
pub fn good_title(n: usize) -> String {
    format!("{:<45}", format!("Page {n} title for crawl testing")).replace(' ', "-")
}

/// A meta description inside the optimal 120-160 character range.
#[allow(dead_code)]
pub fn good_description(n: usize) -> String {
    format!("Description {n} ") + &"d".repeat(126)
}

/// An H1 inside the optimal 10-70 character range.
#[allow(dead_code)]
pub fn good_h1(n: usize) -> String {
    format!("Heading number {n}")
}

/// One fully populated, issue-free export row.
#[allow(dead_code)]
pub fn clean_row(n: usize) -> String {
    let url = format!("https://example.com/page-{n}");
    format!(
        "{url};text/html;200;{};{};{};850;{url};index, follow;WebPage;12",
        good_title(n),
        good_description(n),
        good_h1(n)
    )
}

/// Joins the header and rows into export text.
#[allow(dead_code)]
pub fn export_text(rows: &[String]) -> String {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}

/// Writes export text to `dir/internal_all.csv` and returns its path.
#[allow(dead_code)]
pub fn write_export(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("internal_all.csv");
    std::fs::write(&path, text).expect("Failed to write crawl export");
    path
}
