//! Raw crawl record exports.
//!
//! Both formats stop after `max_rows` records.

use std::collections::BTreeMap;
use std::io::Write;

use csv::WriterBuilder;
use serde::Serialize;

use crate::config::CRAWL_DELIMITER;
use crate::error_handling::ExportError;
use crate::models::{CrawlDataset, CrawlRecord, RawTable};

/// A canonical record with its archived extra columns, as exported to JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedRecord<'a> {
    #[serde(flatten)]
    record: &'a CrawlRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra_fields: Option<&'a BTreeMap<String, String>>,
}

/// Writes the raw table as `;`-delimited CSV in the original column order.
///
/// # Returns
///
/// The number of data rows written.
pub fn write_records_csv<W: Write>(
    table: &RawTable,
    max_rows: usize,
    out: W,
) -> Result<usize, ExportError> {
    let mut writer = WriterBuilder::new()
        .delimiter(CRAWL_DELIMITER)
        .from_writer(out);

    writer.write_record(&table.headers)?;
    let mut count = 0;
    for row in table.rows.iter().take(max_rows) {
        writer.write_record(
            table
                .headers
                .iter()
                .map(|header| row.get(header).unwrap_or("")),
        )?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Writes canonical records as a pretty JSON array.
///
/// Each record carries an `extraFields` object with its non-empty
/// non-canonical cells, when it has any.
///
/// # Returns
///
/// The number of records written.
pub fn write_records_json<W: Write>(
    dataset: &CrawlDataset,
    max_rows: usize,
    mut out: W,
) -> Result<usize, ExportError> {
    let exported: Vec<ExportedRecord<'_>> = dataset
        .records
        .iter()
        .take(max_rows)
        .enumerate()
        .map(|(index, record)| ExportedRecord {
            record,
            extra_fields: dataset.archive.extras(index).filter(|extras| !extras.is_empty()),
        })
        .collect();

    serde_json::to_writer_pretty(&mut out, &exported)?;
    writeln!(out)?;
    out.flush()?;
    Ok(exported.len())
}
