//! Compact crawl summaries for an AI assistant's context window.

use crate::config::SUMMARY_COLUMNS;
use crate::models::RawTable;

const NO_DATA: &str = "No crawl data available.";
const CELL_SEPARATOR: &str = " | ";
const SYSTEM_PROMPT_PREAMBLE: &str = "You are an SEO assistant. Here is a sample of the website crawl data";

/// Renders the first `max_rows` rows as a `|`-separated table.
///
/// Only the address, title, meta description, H1 and status code columns are
/// shown. Cells missing from a row render empty.
pub fn crawl_summary(table: &RawTable, max_rows: usize) -> String {
    if table.is_empty() {
        return NO_DATA.to_string();
    }

    let mut lines = Vec::with_capacity(max_rows.min(table.len()) + 1);
    lines.push(SUMMARY_COLUMNS.join(CELL_SEPARATOR));
    for row in table.rows.iter().take(max_rows) {
        let cells: Vec<&str> = SUMMARY_COLUMNS
            .iter()
            .map(|column| row.get(column).unwrap_or(""))
            .collect();
        lines.push(cells.join(CELL_SEPARATOR));
    }
    lines.join("\n")
}

/// System prompt embedding [`crawl_summary`].
pub fn assistant_system_prompt(table: &RawTable, max_rows: usize) -> String {
    format!(
        "{SYSTEM_PROMPT_PREAMBLE} (showing up to {max_rows} rows):\n{}",
        crawl_summary(table, max_rows)
    )
}
