//! Spreadsheet export.
//!
//! A single-column sheet of labeled blocks, written as comma CSV so any
//! spreadsheet tool can open it. Per-URL detail lists are left to the text
//! and CSV reports.

use std::io::Write;

use csv::WriterBuilder;

use super::types::{report_sections, AnalysisReport, ReportSection, REPORT_TITLE};
use crate::error_handling::ExportError;

/// Blocks shown on the sheet, in order.
const SHEET_SECTIONS: &[&str] = &[
    "Summary",
    "Status Codes",
    "Content Types",
    "Title Length Distribution",
    "Meta Description Length Distribution",
    "H1 Length Distribution",
    "Word Count Distribution",
    "SEO Issues",
    "Detailed Issues",
    "Insights",
];

/// Writes `report` as a single-column sheet.
///
/// # Returns
///
/// The number of rows written, blank separator rows included.
pub fn write_report_sheet<W: Write>(report: &AnalysisReport, out: W) -> Result<usize, ExportError> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(out);
    let mut rows = 0;
    let mut cell = |writer: &mut csv::Writer<W>, text: &str| -> Result<(), ExportError> {
        writer.write_record([text])?;
        rows += 1;
        Ok(())
    };

    cell(&mut writer, REPORT_TITLE)?;
    for section in report_sections(report)
        .into_iter()
        .filter(|s| SHEET_SECTIONS.contains(&s.title.as_str()))
    {
        cell(&mut writer, "")?;
        cell(&mut writer, &section.title)?;
        for (metric, value) in &section.entries {
            cell(&mut writer, &ReportSection::render_entry(metric, value))?;
        }
    }
    writer.flush()?;
    Ok(rows)
}
