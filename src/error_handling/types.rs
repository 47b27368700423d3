//! Error type definitions.
//!
//! The analysis engine itself is total and has no error type. Failures only
//! occur at the edges: logger setup, reading the crawl export, and writing
//! reports.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for reading a crawl export.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The input could not be read.
    #[error("Failed to read crawl export: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited text could not be tokenized.
    #[error("Malformed crawl export: {0}")]
    Csv(#[from] csv::Error),

    /// The input has no header row.
    #[error("Crawl export has no header row")]
    MissingHeader,
}

/// Error types for writing reports and record exports.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing to the destination failed.
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer failed.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}
