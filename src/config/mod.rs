//! Application configuration and constants.
//!
//! This module provides:
//! - Length thresholds and other constants
//! - Crawl export column names
//! - CLI option types and parsing

mod columns;
mod constants;
mod types;

// Re-export all constants
pub use columns::*;
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, RecordFormat, ReportFormat};
