//! Data model shared by the normalizer, analyzer and exporters.

mod issue;
mod record;
mod report;

pub use issue::{IssueKind, IssueTally};
pub use record::{CrawlDataset, CrawlRecord, RawFieldArchive, RawRecord, RawTable};
pub use report::{
    Analysis, DetailedIssues, LengthBucket, LengthClass, WordCountBucket, WordCountRange,
};
