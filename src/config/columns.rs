//! Crawl export column name constants.
//!
//! Header names are matched case-sensitively and exactly against the first
//! row of the export.

/// Page address
pub const COLUMN_ADDRESS: &str = "Address";
/// HTTP status code
pub const COLUMN_STATUS_CODE: &str = "Status Code";
/// First `<title>` element
pub const COLUMN_TITLE: &str = "Title 1";
/// First meta description
pub const COLUMN_META_DESCRIPTION: &str = "Meta Description 1";
/// First H1 heading
pub const COLUMN_H1: &str = "H1-1";
/// Visible word count
pub const COLUMN_WORD_COUNT: &str = "Word Count";
/// First canonical link element
pub const COLUMN_CANONICAL: &str = "Canonical Link Element 1";
/// First meta robots directive
pub const COLUMN_META_ROBOTS: &str = "Meta Robots 1";
/// Schema.org structured data type
pub const COLUMN_SCHEMA_TYPE: &str = "Schema.org Type";
/// Response content type
pub const COLUMN_CONTENT_TYPE: &str = "Content Type";

/// Columns mapped onto the canonical record, in canonical field order.
/// Every other column goes to the raw field archive.
pub const CANONICAL_COLUMNS: &[&str] = &[
    COLUMN_ADDRESS,
    COLUMN_STATUS_CODE,
    COLUMN_TITLE,
    COLUMN_META_DESCRIPTION,
    COLUMN_H1,
    COLUMN_WORD_COUNT,
    COLUMN_CANONICAL,
    COLUMN_META_ROBOTS,
    COLUMN_SCHEMA_TYPE,
    COLUMN_CONTENT_TYPE,
];

/// Columns shown to the assistant in the crawl summary table
pub const SUMMARY_COLUMNS: &[&str] = &[
    COLUMN_ADDRESS,
    COLUMN_TITLE,
    COLUMN_META_DESCRIPTION,
    COLUMN_H1,
    COLUMN_STATUS_CODE,
];

/// Returns true if `column` maps onto a canonical record field.
pub fn is_canonical_column(column: &str) -> bool {
    CANONICAL_COLUMNS.contains(&column)
}
