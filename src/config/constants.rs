//! Configuration constants.
//!
//! Length thresholds used by the analyzer and echoed by every exporter, plus
//! defaults for the CLI and the assistant summary.

// Title length bounds (inclusive optimal range)
/// Titles shorter than this are reported as too short
pub const TITLE_MIN_CHARS: usize = 30;
/// Titles longer than this are reported as too long
pub const TITLE_MAX_CHARS: usize = 60;

// Meta description length bounds
/// Meta descriptions shorter than this are reported as too short
pub const META_DESCRIPTION_MIN_CHARS: usize = 120;
/// Meta descriptions longer than this are reported as too long.
///
/// Some dashboard surfaces displayed 155 here; 160 is the detection threshold
/// and is used everywhere, exports included.
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;

// H1 length bounds
/// H1 headings shorter than this are reported as too short
pub const H1_MIN_CHARS: usize = 10;
/// H1 headings longer than this are reported as too long
pub const H1_MAX_CHARS: usize = 70;

/// Status code treated as a critical issue
pub const HTTP_STATUS_NOT_FOUND: u16 = 404;

// Score derivation
/// Score of a site with no detected issues
pub const MAX_SEO_SCORE: u32 = 100;
/// Points deducted per counted issue
pub const SCORE_PENALTY_PER_ISSUE: u32 = 5;
/// Lowest score still graded as good
pub const SCORE_GOOD_THRESHOLD: u32 = 80;
/// Lowest score still graded as fair
pub const SCORE_FAIR_THRESHOLD: u32 = 60;

/// Field delimiter used by the crawl export and by `;` CSV reports
pub const CRAWL_DELIMITER: u8 = b';';

/// Maximum URL length (2048 characters), matching common browser and server limits
pub const MAX_URL_LENGTH: usize = 2048;

/// Default number of raw rows included in the assistant summary
pub const DEFAULT_SUMMARY_ROWS: usize = 10;
/// Default cap on exported raw records
pub const DEFAULT_MAX_EXPORT_ROWS: usize = 1000;

/// Content type recorded when the crawl export has none
pub const UNKNOWN_CONTENT_TYPE: &str = "unknown";

/// Minimum populated canonical fields for a row to count as a crawled URL
pub const MIN_POPULATED_FIELDS: usize = 2;

// Word count distribution (inclusive upper bounds)
/// Upper bound of the short range (0-300 words)
pub const WORD_COUNT_SHORT_MAX: u64 = 300;
/// Upper bound of the medium range (301-600 words)
pub const WORD_COUNT_MEDIUM_MAX: u64 = 600;
/// Upper bound of the long range (601-1000 words); anything above is very long
pub const WORD_COUNT_LONG_MAX: u64 = 1000;
/// Pages with fewer words than this count as thin content
pub const THIN_CONTENT_MIN_WORDS: u64 = 300;
