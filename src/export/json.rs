//! JSON export: a pretty-printed structural dump of the report.

use std::io::Write;

use super::types::AnalysisReport;
use crate::error_handling::ExportError;

/// Writes `report` as pretty JSON with camelCase keys and a `score` field.
pub fn write_report_json<W: Write>(report: &AnalysisReport, mut out: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
