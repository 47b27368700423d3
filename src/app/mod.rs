//! Main application modules.
//!
//! Statistics and summary printing used by the audit runner.

pub mod statistics;

// Re-export public API
pub use statistics::{print_analysis_statistics, print_simple_summary, print_validation_warnings};
