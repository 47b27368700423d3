//! Duplicate detection pass over titles, meta descriptions and H1s.
//!
//! Counters follow the affected-record convention: a value shared by three
//! URLs adds three to the counter, so each counter equals the length of its
//! detail list.

use std::collections::HashMap;

use crate::models::{Analysis, CrawlRecord, IssueKind};

/// Non-empty field values mapped to the URLs sharing them.
///
/// Groups keep first-seen order, and URLs within a group keep input order.
#[derive(Debug, Default)]
struct ValueGroups<'a> {
    index: HashMap<&'a str, usize>,
    groups: Vec<Vec<&'a str>>,
}

impl<'a> ValueGroups<'a> {
    fn insert(&mut self, value: &'a str, url: &'a str) {
        if value.is_empty() {
            return;
        }
        match self.index.get(value) {
            Some(&slot) => self.groups[slot].push(url),
            None => {
                self.index.insert(value, self.groups.len());
                self.groups.push(vec![url]);
            }
        }
    }

    /// URLs of every group holding two or more records.
    fn duplicated_urls(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups
            .iter()
            .filter(|urls| urls.len() > 1)
            .flat_map(|urls| urls.iter().copied())
    }
}

pub(super) fn record_duplicates(analysis: &mut Analysis, records: &[CrawlRecord]) {
    let mut titles = ValueGroups::default();
    let mut meta_descriptions = ValueGroups::default();
    let mut h1s = ValueGroups::default();

    for record in records {
        titles.insert(&record.title, &record.url);
        meta_descriptions.insert(&record.meta_description, &record.url);
        h1s.insert(&record.h1, &record.url);
    }

    let detail = &mut analysis.detailed_issues;
    let tally = &mut analysis.seo_issues;
    for (groups, kind, list) in [
        (
            &titles,
            IssueKind::DuplicateTitles,
            &mut detail.duplicate_titles,
        ),
        (
            &meta_descriptions,
            IssueKind::DuplicateMetaDescriptions,
            &mut detail.duplicate_meta_descriptions,
        ),
        (&h1s, IssueKind::DuplicateH1s, &mut detail.duplicate_h1s),
    ] {
        let before = list.len();
        list.extend(groups.duplicated_urls().map(str::to_string));
        tally.add(kind, list.len() - before);
    }
}
