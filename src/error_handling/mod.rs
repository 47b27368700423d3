//! Error handling.
//!
//! This module provides the error types raised at the edges of the pipeline:
//! - **InitializationError**: logger setup
//! - **IngestError**: reading and tokenizing the crawl export
//! - **ExportError**: writing reports and record exports
//!
//! Normalization, analysis and scoring never fail; missing or malformed fields
//! fall back to defaults instead.

mod types;

// Re-export public API
pub use types::{ExportError, IngestError, InitializationError};
