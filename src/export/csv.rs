//! CSV export of an analysis report.
//!
//! Semicolon-delimited, one `section;metric;value` row per metric or list
//! line. List lines (issue lines, URLs) leave the metric column empty.

use std::io::Write;

use csv::WriterBuilder;

use super::types::{report_sections, AnalysisReport};
use crate::config::CRAWL_DELIMITER;
use crate::error_handling::ExportError;

/// Writes `report` as CSV.
///
/// # Returns
///
/// The number of data rows written, excluding the header.
pub fn write_report_csv<W: Write>(report: &AnalysisReport, out: W) -> Result<usize, ExportError> {
    let mut writer = WriterBuilder::new()
        .delimiter(CRAWL_DELIMITER)
        .from_writer(out);

    writer.write_record(["section", "metric", "value"])?;
    let mut rows = 0;
    for section in report_sections(report) {
        for (metric, value) in &section.entries {
            writer.write_record([section.title.as_str(), metric.as_str(), value.as_str()])?;
            rows += 1;
        }
    }
    writer.flush()?;
    Ok(rows)
}
