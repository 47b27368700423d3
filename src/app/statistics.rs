//! Statistics printing.

use log::{info, warn};
use strum::IntoEnumIterator;

use crate::config::THIN_CONTENT_MIN_WORDS;
use crate::export::AnalysisReport;
use crate::models::{IssueKind, IssueTally};
use crate::validation::ValidationIssue;

/// Logs the distributions and issue counts of a finished analysis.
pub fn print_analysis_statistics(report: &AnalysisReport) {
    let analysis = &report.analysis;

    if !analysis.status_codes.is_empty() {
        info!("Status Codes ({} URLs):", analysis.total_urls);
        for (code, count) in &analysis.status_codes {
            info!("   {}: {}", code, count);
        }
    }

    if !analysis.content_types.is_empty() {
        info!("Content Types:");
        for (content_type, count) in &analysis.content_types {
            info!("   {}: {}", content_type, count);
        }
    }

    print_issue_statistics(&analysis.seo_issues);

    if analysis.thin_content > 0 {
        info!(
            "Thin content: {} of {} URLs under {} words",
            analysis.thin_content, analysis.total_urls, THIN_CONTENT_MIN_WORDS
        );
    }

    for insight in &analysis.insights {
        info!("💡 {}", insight);
    }
}

/// Logs each non-zero issue counter, in reporting order.
fn print_issue_statistics(tally: &IssueTally) {
    let lines = issue_count_lines(tally);
    if lines.is_empty() {
        return;
    }
    info!("SEO Issue Counts ({} total):", tally.total());
    for line in lines {
        info!("   {}", line);
    }
}

fn issue_count_lines(tally: &IssueTally) -> Vec<String> {
    IssueKind::iter()
        .filter_map(|kind| {
            let count = tally.get(kind);
            (count > 0).then(|| format!("{}: {}", kind.as_str(), count))
        })
        .collect()
}

/// Logs validation findings as warnings.
pub fn print_validation_warnings(issues: &[ValidationIssue]) {
    if issues.is_empty() {
        return;
    }
    warn!("Crawl validation found {} issue(s):", issues.len());
    for issue in issues {
        warn!("   {}", issue);
    }
}

/// Prints a simple one-line summary of the audit.
pub fn print_simple_summary(report: &AnalysisReport, elapsed_seconds: f64) {
    let total_urls = report.analysis.total_urls;
    info!(
        "✅ Audited {} URL{} ({} issues, SEO score {} - {}) in {:.1}s",
        total_urls,
        if total_urls == 1 { "" } else { "s" },
        report.analysis.seo_issues.total(),
        report.score,
        report.grade().as_str(),
        elapsed_seconds
    );
}
