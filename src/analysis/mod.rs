//! Crawl analysis engine.
//!
//! [`analyze`] folds canonical records into an [`Analysis`] report:
//! - status code and content type distributions
//! - title, meta description and H1 length buckets
//! - a word count distribution and a thin-content count
//! - missing-element counters with affected URLs
//! - duplicate titles, meta descriptions and H1s
//! - insights derived from the counters
//!
//! The engine is pure and total: every input, including an empty one,
//! produces a report.

mod duplicates;
mod insights;
mod issues;
mod score;

use log::debug;

use crate::models::{Analysis, CrawlRecord};

// Re-export public API
pub use insights::generate_insights;
pub use issues::{
    is_thin_content, word_count_range, LengthRule, H1_RULE, META_DESCRIPTION_RULE, TITLE_RULE,
};
pub use score::{seo_score, ScoreGrade};

/// Analyzes a crawl.
///
/// # Examples
///
/// ```
/// use crawl_audit::{analyze, seo_score, CrawlRecord};
///
/// let records = vec![CrawlRecord {
///     url: "https://example.com/missing".to_string(),
///     status_code: 404,
///     ..Default::default()
/// }];
/// let analysis = analyze(&records);
/// assert_eq!(analysis.total_urls, 1);
/// assert_eq!(analysis.detailed_issues.critical_issues, vec!["https://example.com/missing"]);
/// assert!(seo_score(&analysis) < 100);
/// ```
pub fn analyze(records: &[CrawlRecord]) -> Analysis {
    let mut analysis = Analysis {
        total_urls: records.len(),
        ..Default::default()
    };

    for record in records {
        issues::record_issues(&mut analysis, record);
    }
    duplicates::record_duplicates(&mut analysis, records);
    analysis.insights = generate_insights(&analysis.seo_issues);

    debug!(
        "Analyzed {} URLs: {} issue lines, {} counted issues",
        analysis.total_urls,
        analysis.issues.len(),
        analysis.seo_issues.total()
    );
    analysis
}
