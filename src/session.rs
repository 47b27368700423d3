//! Session-scoped audit state.
//!
//! An [`AuditSession`] holds the currently loaded crawl and the latest
//! analysis of it. Loading a new crawl discards the old analysis. Analyses
//! computed elsewhere are accepted only while the crawl they were started
//! for is still loaded, so overlapping requests resolve last-write-wins.

use log::debug;

use crate::analysis::analyze;
use crate::models::{Analysis, CrawlDataset, RawTable};
use crate::normalize::normalize_table;

/// Generation stamp handed out by [`AuditSession::begin_analysis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

#[derive(Debug, Default)]
pub struct AuditSession {
    table: RawTable,
    dataset: CrawlDataset,
    analysis: Option<Analysis>,
    generation: u64,
}

impl AuditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the loaded crawl and clears the analysis.
    pub fn load_dataset(&mut self, table: RawTable) {
        self.dataset = normalize_table(&table);
        self.table = table;
        self.analysis = None;
        self.generation += 1;
        debug!(
            "Loaded dataset generation {} with {} records",
            self.generation,
            self.dataset.records.len()
        );
    }

    /// Ticket for an analysis of the currently loaded crawl.
    pub fn begin_analysis(&self) -> AnalysisTicket {
        AnalysisTicket(self.generation)
    }

    /// Stores `analysis` if `ticket` still refers to the loaded crawl.
    ///
    /// Returns `false` and drops the result when a newer crawl was loaded in
    /// the meantime.
    pub fn complete_analysis(&mut self, ticket: AnalysisTicket, analysis: Analysis) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "Dropping stale analysis for generation {} (current {})",
                ticket.0, self.generation
            );
            return false;
        }
        self.analysis = Some(analysis);
        true
    }

    /// Analyzes the loaded crawl and stores the result.
    pub fn analyze_now(&mut self) -> &Analysis {
        self.analysis.insert(analyze(&self.dataset.records))
    }

    pub fn table(&self) -> &RawTable {
        &self.table
    }

    pub fn dataset(&self) -> &CrawlDataset {
        &self.dataset
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawRecord;

    fn table(urls: &[&str]) -> RawTable {
        RawTable {
            headers: vec!["Address".to_string(), "Status Code".to_string()],
            rows: urls
                .iter()
                .map(|url| {
                    [("Address", *url), ("Status Code", "200")]
                        .into_iter()
                        .collect::<RawRecord>()
                })
                .collect(),
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = AuditSession::new();
        assert!(session.table().is_empty());
        assert!(session.dataset().records.is_empty());
        assert!(session.analysis().is_none());
    }

    #[test]
    fn test_analyze_now_stores_result() {
        let mut session = AuditSession::new();
        session.load_dataset(table(&["https://a.test/", "https://a.test/b"]));
        assert_eq!(session.analyze_now().total_urls, 2);
        assert_eq!(session.analysis().map(|a| a.total_urls), Some(2));
    }

    #[test]
    fn test_loading_clears_analysis() {
        let mut session = AuditSession::new();
        session.load_dataset(table(&["https://a.test/"]));
        session.analyze_now();
        session.load_dataset(table(&["https://b.test/"]));
        assert!(session.analysis().is_none());
        assert_eq!(session.dataset().records[0].url, "https://b.test/");
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut session = AuditSession::new();
        session.load_dataset(table(&["https://a.test/"]));
        let stale = session.begin_analysis();
        let stale_result = analyze(&session.dataset().records);

        session.load_dataset(table(&["https://b.test/", "https://b.test/x"]));
        let current = session.begin_analysis();
        let current_result = analyze(&session.dataset().records);

        assert!(session.complete_analysis(current, current_result));
        assert!(!session.complete_analysis(stale, stale_result));
        assert_eq!(session.analysis().map(|a| a.total_urls), Some(2));
    }

    #[test]
    fn test_latest_completion_wins() {
        let mut session = AuditSession::new();
        session.load_dataset(table(&["https://a.test/"]));
        let first = session.begin_analysis();
        let second = session.begin_analysis();

        let older = Analysis::default();
        let newer = analyze(&session.dataset().records);
        assert_ne!(older, newer);

        assert!(session.complete_analysis(first, older));
        assert!(session.complete_analysis(second, newer.clone()));
        assert_eq!(session.analysis(), Some(&newer));
        assert_eq!(session.analysis().map(|a| a.total_urls), Some(1));
    }
}
