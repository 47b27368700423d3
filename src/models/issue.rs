//! Issue categories and the per-category record tally.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

/// Kinds of SEO issue counted in [`IssueTally`].
///
/// Iteration order is the reporting priority: insights, statistics and
/// exports all list categories in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum IssueKind {
    MissingTitle,
    MissingMetaDescription,
    MissingH1,
    DuplicateTitles,
    DuplicateMetaDescriptions,
    DuplicateH1s,
    CanonicalIssues,
    MetaRobotsIssues,
    MissingStructuredData,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IssueKind {
    /// Report label for the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::MissingTitle => "Missing Titles",
            IssueKind::MissingMetaDescription => "Missing Meta Descriptions",
            IssueKind::MissingH1 => "Missing H1 Tags",
            IssueKind::DuplicateTitles => "Duplicate Titles",
            IssueKind::DuplicateMetaDescriptions => "Duplicate Meta Descriptions",
            IssueKind::DuplicateH1s => "Duplicate H1 Tags",
            IssueKind::CanonicalIssues => "Missing Canonical Tags",
            IssueKind::MetaRobotsIssues => "Missing Meta Robots Tags",
            IssueKind::MissingStructuredData => "Missing Structured Data",
        }
    }

    /// Phrase following the page count in an insight line.
    pub fn insight_phrase(&self) -> &'static str {
        match self {
            IssueKind::MissingTitle => "pages are missing titles",
            IssueKind::MissingMetaDescription => "pages are missing meta descriptions",
            IssueKind::MissingH1 => "pages are missing H1 tags",
            IssueKind::DuplicateTitles => "pages have duplicate titles",
            IssueKind::DuplicateMetaDescriptions => "pages have duplicate meta descriptions",
            IssueKind::DuplicateH1s => "pages have duplicate H1 tags",
            IssueKind::CanonicalIssues => "pages are missing canonical tags",
            IssueKind::MetaRobotsIssues => "pages are missing meta robots tags",
            IssueKind::MissingStructuredData => "pages are missing structured data",
        }
    }
}

/// Number of affected records per issue category (`seoIssues`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTally {
    pub missing_title: usize,
    pub missing_meta_description: usize,
    pub missing_h1: usize,
    pub duplicate_titles: usize,
    pub duplicate_meta_descriptions: usize,
    pub duplicate_h1s: usize,
    pub canonical_issues: usize,
    pub meta_robots_issues: usize,
    pub missing_structured_data: usize,
}

impl IssueTally {
    pub fn get(&self, kind: IssueKind) -> usize {
        *self.slot(kind)
    }

    pub fn increment(&mut self, kind: IssueKind) {
        self.add(kind, 1);
    }

    pub fn add(&mut self, kind: IssueKind, count: usize) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(count);
    }

    /// Sum over every category.
    pub fn total(&self) -> usize {
        IssueKind::iter().map(|kind| self.get(kind)).sum()
    }

    /// Non-zero categories in reporting order.
    pub fn non_zero(&self) -> impl Iterator<Item = (IssueKind, usize)> + '_ {
        IssueKind::iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, count)| *count > 0)
    }

    fn slot(&self, kind: IssueKind) -> &usize {
        match kind {
            IssueKind::MissingTitle => &self.missing_title,
            IssueKind::MissingMetaDescription => &self.missing_meta_description,
            IssueKind::MissingH1 => &self.missing_h1,
            IssueKind::DuplicateTitles => &self.duplicate_titles,
            IssueKind::DuplicateMetaDescriptions => &self.duplicate_meta_descriptions,
            IssueKind::DuplicateH1s => &self.duplicate_h1s,
            IssueKind::CanonicalIssues => &self.canonical_issues,
            IssueKind::MetaRobotsIssues => &self.meta_robots_issues,
            IssueKind::MissingStructuredData => &self.missing_structured_data,
        }
    }

    fn slot_mut(&mut self, kind: IssueKind) -> &mut usize {
        match kind {
            IssueKind::MissingTitle => &mut self.missing_title,
            IssueKind::MissingMetaDescription => &mut self.missing_meta_description,
            IssueKind::MissingH1 => &mut self.missing_h1,
            IssueKind::DuplicateTitles => &mut self.duplicate_titles,
            IssueKind::DuplicateMetaDescriptions => &mut self.duplicate_meta_descriptions,
            IssueKind::DuplicateH1s => &mut self.duplicate_h1s,
            IssueKind::CanonicalIssues => &mut self.canonical_issues,
            IssueKind::MetaRobotsIssues => &mut self.meta_robots_issues,
            IssueKind::MissingStructuredData => &mut self.missing_structured_data,
        }
    }
}
