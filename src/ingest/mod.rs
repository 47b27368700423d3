//! Crawl export ingestion.
//!
//! Turns semicolon-delimited text into a [`RawTable`]: the header row plus one
//! header-keyed [`RawRecord`] per data row. Rows may be ragged; cells past the
//! header are ignored and missing trailing cells are left absent.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::config::CRAWL_DELIMITER;
use crate::error_handling::IngestError;
use crate::models::{RawRecord, RawTable};

/// Parses a crawl export from any reader.
///
/// # Errors
///
/// Returns `IngestError::MissingHeader` for empty input, or
/// `IngestError::Csv` if the text cannot be tokenized.
pub fn parse_crawl_export<R: Read>(reader: R) -> Result<RawTable, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(CRAWL_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(IngestError::MissingHeader);
    }

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let row: RawRecord = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| (header.as_str(), cell))
            .collect();
        rows.push(row);
    }

    debug!(
        "Ingested {} rows across {} columns",
        rows.len(),
        headers.len()
    );
    Ok(RawTable { headers, rows })
}

/// Parses a crawl export held in memory.
pub fn parse_crawl_text(text: &str) -> Result<RawTable, IngestError> {
    parse_crawl_export(text.as_bytes())
}

/// Reads a crawl export from `path`, or from stdin when `path` is `-`.
pub fn read_crawl_export(path: &Path) -> Result<RawTable, IngestError> {
    if path.as_os_str() == "-" {
        debug!("Reading crawl export from stdin");
        return parse_crawl_export(io::stdin().lock());
    }
    let file = File::open(path)?;
    parse_crawl_export(BufReader::new(file))
}
