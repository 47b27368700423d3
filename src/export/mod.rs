//! Report and record exports.
//!
//! Analysis reports can be written as plain text, `;`-delimited CSV, pretty
//! JSON or a single-column spreadsheet sheet. The raw crawl records can be
//! exported back out as CSV or JSON. Every writer takes any `io::Write`, so
//! callers choose between files and stdout (see [`open_output`]).

mod csv;
mod json;
mod records;
mod sheet;
mod text;
mod types;
mod writer;

use std::io::Write;

use crate::config::ReportFormat;
use crate::error_handling::ExportError;

pub use self::csv::write_report_csv;
pub use json::write_report_json;
pub use records::{write_records_csv, write_records_json};
pub use sheet::write_report_sheet;
pub use text::{render_text_report, write_report_text};
pub use types::{records_filename, report_filename, AnalysisReport};
pub use writer::open_output;

/// Writes `report` in the requested format.
pub fn write_report<W: Write>(
    format: ReportFormat,
    report: &AnalysisReport,
    out: W,
) -> Result<(), ExportError> {
    match format {
        ReportFormat::Text => write_report_text(report, out),
        ReportFormat::Csv => write_report_csv(report, out).map(|_| ()),
        ReportFormat::Json => write_report_json(report, out),
        ReportFormat::Sheet => write_report_sheet(report, out).map(|_| ()),
    }
}
