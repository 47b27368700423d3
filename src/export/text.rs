//! Plain-text analysis report: labeled sections separated by blank lines.

use std::io::Write;

use super::types::{report_sections, AnalysisReport, ReportSection, REPORT_TITLE};
use crate::error_handling::ExportError;

/// Renders `report` as plain text.
pub fn render_text_report(report: &AnalysisReport) -> String {
    let mut blocks = vec![REPORT_TITLE.to_string()];
    for section in report_sections(report) {
        let mut lines = vec![section.title.clone()];
        lines.extend(
            section
                .entries
                .iter()
                .map(|(metric, value)| ReportSection::render_entry(metric, value)),
        );
        blocks.push(lines.join("\n"));
    }
    blocks.join("\n\n")
}

/// Writes [`render_text_report`] followed by a newline.
pub fn write_report_text<W: Write>(report: &AnalysisReport, mut out: W) -> Result<(), ExportError> {
    writeln!(out, "{}", render_text_report(report))?;
    out.flush()?;
    Ok(())
}
