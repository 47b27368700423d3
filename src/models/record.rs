//! Crawl record types: raw rows as ingested and the canonical record shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{
    COLUMN_ADDRESS, COLUMN_CANONICAL, COLUMN_CONTENT_TYPE, COLUMN_H1, COLUMN_META_DESCRIPTION,
    COLUMN_META_ROBOTS, COLUMN_SCHEMA_TYPE, COLUMN_STATUS_CODE, COLUMN_TITLE, COLUMN_WORD_COUNT,
    UNKNOWN_CONTENT_TYPE,
};

/// One data row of a crawl export, keyed by header name.
///
/// Cells missing from a short row are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cell, replacing any previous value for the column.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Returns the cell for `column`, if present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Iterates over `(column, value)` pairs in column-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A parsed crawl export: the header row and every data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Header names in file order
    pub headers: Vec<String>,
    /// Data rows in file order
    pub rows: Vec<RawRecord>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One crawled URL in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlRecord {
    pub url: String,
    pub status_code: u16,
    pub title: String,
    pub meta_description: String,
    pub h1: String,
    pub word_count: u64,
    pub canonical: String,
    pub meta_robots: String,
    pub schema_type: String,
    pub content_type: String,
}

impl Default for CrawlRecord {
    fn default() -> Self {
        Self {
            url: String::new(),
            status_code: 0,
            title: String::new(),
            meta_description: String::new(),
            h1: String::new(),
            word_count: 0,
            canonical: String::new(),
            meta_robots: String::new(),
            schema_type: String::new(),
            content_type: UNKNOWN_CONTENT_TYPE.to_string(),
        }
    }
}

impl CrawlRecord {
    /// Renders the record back into export columns.
    ///
    /// Normalizing the result yields the same record again.
    pub fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new();
        raw.insert(COLUMN_ADDRESS, self.url.as_str());
        raw.insert(COLUMN_STATUS_CODE, self.status_code.to_string());
        raw.insert(COLUMN_TITLE, self.title.as_str());
        raw.insert(COLUMN_META_DESCRIPTION, self.meta_description.as_str());
        raw.insert(COLUMN_H1, self.h1.as_str());
        raw.insert(COLUMN_WORD_COUNT, self.word_count.to_string());
        raw.insert(COLUMN_CANONICAL, self.canonical.as_str());
        raw.insert(COLUMN_META_ROBOTS, self.meta_robots.as_str());
        raw.insert(COLUMN_SCHEMA_TYPE, self.schema_type.as_str());
        raw.insert(COLUMN_CONTENT_TYPE, self.content_type.as_str());
        raw
    }
}

/// Non-canonical columns kept aside from the canonical records.
///
/// `rows[i]` holds the extra cells of the i-th normalized record, so the
/// analyzer never has to look at free-form columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFieldArchive {
    /// Extra column names in header order
    pub columns: Vec<String>,
    /// Non-empty extra cells per normalized record
    pub rows: Vec<BTreeMap<String, String>>,
}

impl RawFieldArchive {
    /// Extra cells for the record at `index`.
    pub fn extras(&self, index: usize) -> Option<&BTreeMap<String, String>> {
        self.rows.get(index)
    }
}

/// Output of the field normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlDataset {
    pub records: Vec<CrawlRecord>,
    pub archive: RawFieldArchive,
}
