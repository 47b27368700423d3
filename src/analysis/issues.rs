//! Issue detection pass: distributions, length and word count buckets,
//! missing elements and critical status codes.

use crate::config::{
    H1_MAX_CHARS, H1_MIN_CHARS, HTTP_STATUS_NOT_FOUND, META_DESCRIPTION_MAX_CHARS,
    META_DESCRIPTION_MIN_CHARS, THIN_CONTENT_MIN_WORDS, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
    WORD_COUNT_LONG_MAX, WORD_COUNT_MEDIUM_MAX, WORD_COUNT_SHORT_MAX,
};
use crate::models::{Analysis, CrawlRecord, IssueKind, LengthClass, WordCountRange};

/// Optimal length range for one text field, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    pub min: usize,
    pub max: usize,
}

pub const TITLE_RULE: LengthRule = LengthRule {
    min: TITLE_MIN_CHARS,
    max: TITLE_MAX_CHARS,
};

pub const META_DESCRIPTION_RULE: LengthRule = LengthRule {
    min: META_DESCRIPTION_MIN_CHARS,
    max: META_DESCRIPTION_MAX_CHARS,
};

pub const H1_RULE: LengthRule = LengthRule {
    min: H1_MIN_CHARS,
    max: H1_MAX_CHARS,
};

impl LengthRule {
    /// Classifies `value` by its length in characters.
    pub fn classify(&self, value: &str) -> LengthClass {
        let len = value.chars().count();
        if len < self.min {
            LengthClass::TooShort
        } else if len > self.max {
            LengthClass::TooLong
        } else {
            LengthClass::Optimal
        }
    }

    /// True when `value` falls inside the optimal range.
    pub fn is_optimal(&self, value: &str) -> bool {
        self.classify(value) == LengthClass::Optimal
    }
}

/// Word count range of a page; range bounds are inclusive.
pub fn word_count_range(words: u64) -> WordCountRange {
    match words {
        0..=WORD_COUNT_SHORT_MAX => WordCountRange::Short,
        n if n <= WORD_COUNT_MEDIUM_MAX => WordCountRange::Medium,
        n if n <= WORD_COUNT_LONG_MAX => WordCountRange::Long,
        _ => WordCountRange::VeryLong,
    }
}

/// True for pages below the thin-content threshold.
pub fn is_thin_content(words: u64) -> bool {
    words < THIN_CONTENT_MIN_WORDS
}

/// Folds one record into the report. Called once per record, in input order.
pub(super) fn record_issues(analysis: &mut Analysis, record: &CrawlRecord) {
    *analysis
        .content_types
        .entry(record.content_type.clone())
        .or_insert(0) += 1;
    *analysis.status_codes.entry(record.status_code).or_insert(0) += 1;

    let url = record.url.as_str();

    let title = TITLE_RULE.classify(&record.title);
    analysis.title_length.record(title);
    push_length_issue(&mut analysis.issues, "Title", title, url);

    let meta = META_DESCRIPTION_RULE.classify(&record.meta_description);
    analysis.meta_description_length.record(meta);
    push_length_issue(&mut analysis.issues, "Meta description", meta, url);

    let h1 = H1_RULE.classify(&record.h1);
    analysis.h1_length.record(h1);
    push_length_issue(&mut analysis.issues, "H1", h1, url);

    // Word count feeds the distribution and the thin-content advisory, never
    // the scored issue tally.
    analysis
        .word_count
        .record(word_count_range(record.word_count));
    if is_thin_content(record.word_count) {
        analysis.thin_content += 1;
    }

    let tally = &mut analysis.seo_issues;
    let detail = &mut analysis.detailed_issues;
    if record.title.is_empty() {
        tally.increment(IssueKind::MissingTitle);
        detail.missing_titles.push(record.url.clone());
    }
    if record.meta_description.is_empty() {
        tally.increment(IssueKind::MissingMetaDescription);
    }
    if record.h1.is_empty() {
        tally.increment(IssueKind::MissingH1);
        detail.missing_h1s.push(record.url.clone());
    }
    if record.canonical.is_empty() {
        tally.increment(IssueKind::CanonicalIssues);
        detail.missing_canonicals.push(record.url.clone());
    }
    if record.meta_robots.is_empty() {
        tally.increment(IssueKind::MetaRobotsIssues);
    }
    if record.schema_type.is_empty() {
        tally.increment(IssueKind::MissingStructuredData);
        detail.missing_structured_data.push(record.url.clone());
    }

    if record.status_code == HTTP_STATUS_NOT_FOUND {
        detail.critical_issues.push(record.url.clone());
        analysis
            .issues
            .push(format!("{HTTP_STATUS_NOT_FOUND} error found for {url}"));
    }
}

fn push_length_issue(issues: &mut Vec<String>, field: &str, class: LengthClass, url: &str) {
    match class {
        LengthClass::TooShort => issues.push(format!("{field} too short: {url}")),
        LengthClass::TooLong => issues.push(format!("{field} too long: {url}")),
        LengthClass::Optimal => {}
    }
}
