//! Field normalizer.
//!
//! Maps known crawl export columns onto [`CrawlRecord`] and moves every other
//! column into the [`RawFieldArchive`]. Missing or malformed cells never fail:
//! strings default to empty, numbers to zero and the content type to
//! `"unknown"`.

use std::collections::BTreeMap;

use log::debug;

use crate::config::{
    is_canonical_column, CANONICAL_COLUMNS, COLUMN_ADDRESS, COLUMN_CANONICAL, COLUMN_CONTENT_TYPE,
    COLUMN_H1, COLUMN_META_DESCRIPTION, COLUMN_META_ROBOTS, COLUMN_SCHEMA_TYPE,
    COLUMN_STATUS_CODE, COLUMN_TITLE, COLUMN_WORD_COUNT, MIN_POPULATED_FIELDS,
    UNKNOWN_CONTENT_TYPE,
};
use crate::models::{CrawlDataset, CrawlRecord, RawFieldArchive, RawRecord, RawTable};

/// Normalizes raw rows into canonical records.
///
/// Rows with fewer than two populated canonical cells are dropped.
pub fn normalize_records(rows: &[RawRecord]) -> Vec<CrawlRecord> {
    rows.iter().filter_map(normalize_record).collect()
}

/// Normalizes a whole table, archiving the non-canonical columns.
pub fn normalize_table(table: &RawTable) -> CrawlDataset {
    let columns: Vec<String> = table
        .headers
        .iter()
        .filter(|h| !is_canonical_column(h))
        .cloned()
        .collect();

    let mut records = Vec::with_capacity(table.rows.len());
    let mut extras = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let Some(record) = normalize_record(row) else {
            continue;
        };
        let archived: BTreeMap<String, String> = row
            .iter()
            .filter(|(column, value)| !is_canonical_column(column) && !value.is_empty())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();
        records.push(record);
        extras.push(archived);
    }

    let dropped = table.rows.len() - records.len();
    if dropped > 0 {
        debug!("Dropped {} rows without enough populated fields", dropped);
    }

    CrawlDataset {
        records,
        archive: RawFieldArchive {
            columns,
            rows: extras,
        },
    }
}

/// Normalizes one row, or returns `None` if it is too sparse to be a crawled URL.
pub fn normalize_record(row: &RawRecord) -> Option<CrawlRecord> {
    let populated = CANONICAL_COLUMNS
        .iter()
        .filter(|column| row.get(column).is_some_and(|v| !v.trim().is_empty()))
        .count();
    if populated < MIN_POPULATED_FIELDS {
        return None;
    }

    let text = |column: &str| row.get(column).unwrap_or_default().to_string();
    let content_type = match row.get(COLUMN_CONTENT_TYPE) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => UNKNOWN_CONTENT_TYPE.to_string(),
    };

    Some(CrawlRecord {
        url: text(COLUMN_ADDRESS),
        status_code: u16::try_from(parse_count(row.get(COLUMN_STATUS_CODE))).unwrap_or(0),
        title: text(COLUMN_TITLE),
        meta_description: text(COLUMN_META_DESCRIPTION),
        h1: text(COLUMN_H1),
        word_count: parse_count(row.get(COLUMN_WORD_COUNT)),
        canonical: text(COLUMN_CANONICAL),
        meta_robots: text(COLUMN_META_ROBOTS),
        schema_type: text(COLUMN_SCHEMA_TYPE),
        content_type,
    })
}

/// Lenient integer parse: leading digits after optional whitespace and sign.
///
/// Absent, non-numeric, negative or overflowing input yields 0.
fn parse_count(raw: Option<&str>) -> u64 {
    let Some(text) = raw.map(str::trim) else {
        return 0;
    };
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end].parse::<u64>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raw(pairs: &[(&str, &str)]) -> RawRecord {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_maps_known_columns() {
        let row = raw(&[
            ("Address", "https://example.com/"),
            ("Status Code", "200"),
            ("Title 1", "Example home"),
            ("Meta Description 1", "A description"),
            ("H1-1", "Welcome"),
            ("Word Count", "812"),
            ("Canonical Link Element 1", "https://example.com/"),
            ("Meta Robots 1", "index, follow"),
            ("Schema.org Type", "WebPage"),
            ("Content Type", "text/html; charset=UTF-8"),
        ]);
        let record = normalize_record(&row).expect("Should keep populated row");

        assert_eq!(record.url, "https://example.com/");
        assert_eq!(record.status_code, 200);
        assert_eq!(record.title, "Example home");
        assert_eq!(record.meta_description, "A description");
        assert_eq!(record.h1, "Welcome");
        assert_eq!(record.word_count, 812);
        assert_eq!(record.canonical, "https://example.com/");
        assert_eq!(record.meta_robots, "index, follow");
        assert_eq!(record.schema_type, "WebPage");
        assert_eq!(record.content_type, "text/html; charset=UTF-8");
    }

    #[test]
    fn test_missing_fields_default() {
        let row = raw(&[("Address", "https://example.com/x"), ("Title 1", "X")]);
        let record = normalize_record(&row).expect("Two populated fields are enough");

        assert_eq!(record.status_code, 0);
        assert_eq!(record.word_count, 0);
        assert_eq!(record.h1, "");
        assert_eq!(record.content_type, "unknown");
    }

    #[test]
    fn test_sparse_rows_are_dropped() {
        assert!(normalize_record(&raw(&[("Address", "https://example.com/")])).is_none());
        assert!(normalize_record(&raw(&[("Address", ""), ("Title 1", "")])).is_none());
        // Extra columns do not count towards the populated fields
        assert!(normalize_record(&raw(&[("Address", "https://a.test/"), ("Inlinks", "3")])).is_none());
    }

    #[test]
    fn test_parse_count_is_lenient() {
        assert_eq!(parse_count(Some("404")), 404);
        assert_eq!(parse_count(Some(" 301 Moved")), 301);
        assert_eq!(parse_count(Some("+12")), 12);
        assert_eq!(parse_count(Some("abc")), 0);
        assert_eq!(parse_count(Some("-5")), 0);
        assert_eq!(parse_count(Some("")), 0);
        assert_eq!(parse_count(None), 0);
        assert_eq!(parse_count(Some("99999999999999999999999")), 0);
    }

    #[test]
    fn test_out_of_range_status_is_zero() {
        let row = raw(&[("Address", "https://a.test/"), ("Status Code", "70000")]);
        let record = normalize_record(&row).expect("Should keep row");
        assert_eq!(record.status_code, 0);
    }

    #[test]
    fn test_normalize_table_archives_extra_columns() {
        let mut first = raw(&[
            ("Address", "https://a.test/"),
            ("Status Code", "200"),
            ("Inlinks", "12"),
            ("Indexability", ""),
        ]);
        first.insert("Outlinks", "7");
        let table = RawTable {
            headers: vec![
                "Address".to_string(),
                "Status Code".to_string(),
                "Inlinks".to_string(),
                "Indexability".to_string(),
                "Outlinks".to_string(),
            ],
            rows: vec![first, raw(&[("Address", "https://b.test/")])],
        };

        let dataset = normalize_table(&table);
        assert_eq!(dataset.records.len(), 1);
        assert_eq!(
            dataset.archive.columns,
            vec!["Inlinks", "Indexability", "Outlinks"]
        );
        let extras = dataset.archive.extras(0).expect("archived row");
        assert_eq!(extras.get("Inlinks").map(String::as_str), Some("12"));
        assert_eq!(extras.get("Outlinks").map(String::as_str), Some("7"));
        assert!(!extras.contains_key("Indexability"));
        assert!(!extras.contains_key("Address"));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let rows = vec![
            raw(&[("Address", "https://a.test/"), ("Status Code", "oops")]),
            raw(&[("Address", "https://b.test/"), ("Title 1", "B"), ("Content Type", "")]),
        ];
        let once = normalize_records(&rows);
        let again: Vec<RawRecord> = once.iter().map(CrawlRecord::to_raw).collect();
        assert_eq!(normalize_records(&again), once);
    }

    proptest! {
        #[test]
        fn test_normalization_idempotent_for_any_row(
            url in "https://[a-z]{1,12}\\.test/[a-z]{0,8}",
            status in "[0-9a-z ]{0,5}",
            title in ".{0,80}",
            words in "[0-9]{0,6}",
        ) {
            let row = raw(&[
                ("Address", url.as_str()),
                ("Status Code", status.as_str()),
                ("Title 1", title.as_str()),
                ("Word Count", words.as_str()),
            ]);
            let once = normalize_records(std::slice::from_ref(&row));
            let again: Vec<RawRecord> = once.iter().map(CrawlRecord::to_raw).collect();
            prop_assert_eq!(normalize_records(&again), once);
        }
    }
}
