//! The `Analysis` report and its building blocks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::issue::IssueTally;

/// Where a field's length falls relative to its optimal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthClass {
    TooShort,
    Optimal,
    TooLong,
}

/// Partition of all records by one field's length.
///
/// The three counts always sum to the analysis' `total_urls`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthBucket {
    pub too_short: usize,
    pub optimal: usize,
    pub too_long: usize,
}

impl LengthBucket {
    pub fn record(&mut self, class: LengthClass) {
        match class {
            LengthClass::TooShort => self.too_short += 1,
            LengthClass::Optimal => self.optimal += 1,
            LengthClass::TooLong => self.too_long += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.too_short + self.optimal + self.too_long
    }
}

/// Word count range of one page, as reported in the distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCountRange {
    Short,
    Medium,
    Long,
    VeryLong,
}

/// Partition of all records by word count.
///
/// Like [`LengthBucket`], the counts sum to `total_urls`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCountBucket {
    pub short: usize,
    pub medium: usize,
    pub long: usize,
    pub very_long: usize,
}

impl WordCountBucket {
    pub fn record(&mut self, range: WordCountRange) {
        match range {
            WordCountRange::Short => self.short += 1,
            WordCountRange::Medium => self.medium += 1,
            WordCountRange::Long => self.long += 1,
            WordCountRange::VeryLong => self.very_long += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.short + self.medium + self.long + self.very_long
    }
}

/// URLs affected by each issue category, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedIssues {
    pub missing_canonicals: Vec<String>,
    pub missing_titles: Vec<String>,
    pub duplicate_titles: Vec<String>,
    pub missing_h1s: Vec<String>,
    pub missing_structured_data: Vec<String>,
    pub critical_issues: Vec<String>,
    pub duplicate_meta_descriptions: Vec<String>,
    pub duplicate_h1s: Vec<String>,
}

impl DetailedIssues {
    /// Labeled lists in report order.
    pub fn sections(&self) -> [(&'static str, &[String]); 8] {
        [
            ("Missing Canonicals", &self.missing_canonicals),
            ("Missing Titles", &self.missing_titles),
            ("Duplicate Titles", &self.duplicate_titles),
            ("Missing H1s", &self.missing_h1s),
            ("Missing Structured Data", &self.missing_structured_data),
            ("Critical Issues", &self.critical_issues),
            (
                "Duplicate Meta Descriptions",
                &self.duplicate_meta_descriptions,
            ),
            ("Duplicate H1s", &self.duplicate_h1s),
        ]
    }
}

/// Aggregate SEO-health report for one crawl.
///
/// Recomputed from scratch on every analysis request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub total_urls: usize,
    pub status_codes: BTreeMap<u16, usize>,
    pub content_types: BTreeMap<String, usize>,
    pub title_length: LengthBucket,
    pub meta_description_length: LengthBucket,
    pub h1_length: LengthBucket,
    pub word_count: WordCountBucket,
    /// Pages below the thin-content word threshold; advisory, not scored
    pub thin_content: usize,
    pub seo_issues: IssueTally,
    /// Human-readable issue lines
    pub issues: Vec<String>,
    pub insights: Vec<String>,
    pub detailed_issues: DetailedIssues,
}
