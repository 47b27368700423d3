//! Export types and the shared report layout.

use chrono::NaiveDate;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::analysis::{seo_score, LengthRule, ScoreGrade, H1_RULE, META_DESCRIPTION_RULE, TITLE_RULE};
use crate::config::{
    RecordFormat, ReportFormat, THIN_CONTENT_MIN_WORDS, WORD_COUNT_LONG_MAX,
    WORD_COUNT_MEDIUM_MAX, WORD_COUNT_SHORT_MAX,
};
use crate::models::{Analysis, IssueKind, LengthBucket, WordCountBucket};

pub(crate) const REPORT_TITLE: &str = "SEO Analysis Report";

/// An analysis bundled with its derived score, as exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub analysis: Analysis,
    pub score: u32,
}

impl AnalysisReport {
    pub fn new(analysis: Analysis) -> Self {
        let score = seo_score(&analysis);
        Self { analysis, score }
    }

    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.score)
    }
}

/// One labeled block of a report.
///
/// Entries with an empty metric are plain list lines (issue lines, URLs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportSection {
    pub title: String,
    pub entries: Vec<(String, String)>,
}

impl ReportSection {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    fn metric(mut self, metric: impl Into<String>, value: impl ToString) -> Self {
        self.entries.push((metric.into(), value.to_string()));
        self
    }

    fn lines<'a>(mut self, lines: impl IntoIterator<Item = &'a String>) -> Self {
        self.entries
            .extend(lines.into_iter().map(|line| (String::new(), line.clone())));
        self
    }

    /// `metric: value`, or the bare value for list lines.
    pub fn render_entry(metric: &str, value: &str) -> String {
        if metric.is_empty() {
            value.to_string()
        } else {
            format!("{metric}: {value}")
        }
    }
}

fn length_section(title: &str, rule: LengthRule, bucket: &LengthBucket) -> ReportSection {
    ReportSection::new(title)
        .metric(format!("Too Short (< {} chars)", rule.min), bucket.too_short)
        .metric(
            format!("Optimal ({}-{} chars)", rule.min, rule.max),
            bucket.optimal,
        )
        .metric(format!("Too Long (> {} chars)", rule.max), bucket.too_long)
}

fn word_count_section(bucket: &WordCountBucket, thin_content: usize) -> ReportSection {
    ReportSection::new("Word Count Distribution")
        .metric(format!("0-{WORD_COUNT_SHORT_MAX} words"), bucket.short)
        .metric(
            format!("{}-{WORD_COUNT_MEDIUM_MAX} words", WORD_COUNT_SHORT_MAX + 1),
            bucket.medium,
        )
        .metric(
            format!("{}-{WORD_COUNT_LONG_MAX} words", WORD_COUNT_MEDIUM_MAX + 1),
            bucket.long,
        )
        .metric(format!("{WORD_COUNT_LONG_MAX}+ words"), bucket.very_long)
        .metric(
            format!("Thin Content (< {THIN_CONTENT_MIN_WORDS} words)"),
            thin_content,
        )
}

/// Every section of a report, in export order.
///
/// The text, CSV and sheet exporters all render this layout, so length
/// labels always show the thresholds the analyzer applied.
pub(crate) fn report_sections(report: &AnalysisReport) -> Vec<ReportSection> {
    let analysis = &report.analysis;

    let summary = ReportSection::new("Summary")
        .metric("Total URLs", analysis.total_urls)
        .metric("SEO Score", report.score)
        .metric("Grade", report.grade().as_str());

    let status_codes = analysis
        .status_codes
        .iter()
        .fold(ReportSection::new("Status Codes"), |section, (code, count)| {
            section.metric(code.to_string(), count)
        });

    let content_types = analysis
        .content_types
        .iter()
        .fold(ReportSection::new("Content Types"), |section, (kind, count)| {
            section.metric(kind.as_str(), count)
        });

    let seo_issues = IssueKind::iter().fold(ReportSection::new("SEO Issues"), |section, kind| {
        section.metric(kind.as_str(), analysis.seo_issues.get(kind))
    });

    let mut sections = vec![
        summary,
        status_codes,
        content_types,
        length_section(
            "Title Length Distribution",
            TITLE_RULE,
            &analysis.title_length,
        ),
        length_section(
            "Meta Description Length Distribution",
            META_DESCRIPTION_RULE,
            &analysis.meta_description_length,
        ),
        length_section("H1 Length Distribution", H1_RULE, &analysis.h1_length),
        word_count_section(&analysis.word_count, analysis.thin_content),
        seo_issues,
        ReportSection::new("Detailed Issues").lines(&analysis.issues),
        ReportSection::new("Insights").lines(&analysis.insights),
    ];
    sections.extend(
        analysis
            .detailed_issues
            .sections()
            .into_iter()
            .map(|(title, urls)| ReportSection::new(title).lines(urls)),
    );
    sections
}

/// Dated file name for an analysis report, e.g. `seo-analysis-2024-05-01.txt`.
pub fn report_filename(format: ReportFormat, date: NaiveDate) -> String {
    format!("seo-analysis-{}.{}", date.format("%Y-%m-%d"), format.extension())
}

/// Dated file name for a raw record export, e.g. `crawl-data-2024-05-01.csv`.
pub fn records_filename(format: RecordFormat, date: NaiveDate) -> String {
    format!("crawl-data-{}.{}", date.format("%Y-%m-%d"), format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> AnalysisReport {
        let mut analysis = Analysis {
            total_urls: 2,
            ..Default::default()
        };
        analysis.status_codes.insert(404, 1);
        analysis.status_codes.insert(200, 1);
        analysis.seo_issues.add(IssueKind::MissingTitle, 2);
        analysis.detailed_issues.critical_issues.push("https://a.test/gone".to_string());
        AnalysisReport::new(analysis)
    }

    #[test]
    fn test_report_carries_score() {
        let report = sample_report();
        assert_eq!(report.score, 90);
        assert_eq!(report.grade(), ScoreGrade::Good);
    }

    #[test]
    fn test_report_json_is_flat() {
        let json = serde_json::to_value(sample_report()).expect("serialize");
        assert_eq!(json["score"], 90);
        assert_eq!(json["totalUrls"], 2);
        assert_eq!(json["seoIssues"]["missingTitle"], 2);
        assert!(json.get("analysis").is_none());
    }

    #[test]
    fn test_section_order() {
        let titles: Vec<String> = report_sections(&sample_report())
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles[0], "Summary");
        assert_eq!(titles[1], "Status Codes");
        assert_eq!(titles[6], "Word Count Distribution");
        assert_eq!(titles[7], "SEO Issues");
        assert_eq!(titles[8], "Detailed Issues");
        assert_eq!(titles[9], "Insights");
        assert_eq!(titles.last().map(String::as_str), Some("Duplicate H1s"));
        assert_eq!(titles.len(), 18);
    }

    #[test]
    fn test_status_codes_ascending() {
        let sections = report_sections(&sample_report());
        let codes: Vec<&str> = sections[1].entries.iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(codes, vec!["200", "404"]);
    }

    #[test]
    fn test_length_labels_use_rule_thresholds() {
        let sections = report_sections(&sample_report());
        let meta: Vec<&str> = sections[4].entries.iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(
            meta,
            vec![
                "Too Short (< 120 chars)",
                "Optimal (120-160 chars)",
                "Too Long (> 160 chars)"
            ]
        );
        assert_eq!(sections[5].entries[0].0, "Too Short (< 10 chars)");
    }

    #[test]
    fn test_word_count_labels() {
        let mut report = sample_report();
        report.analysis.word_count.short = 2;
        report.analysis.thin_content = 1;
        let sections = report_sections(&report);
        assert_eq!(
            sections[6].entries,
            vec![
                ("0-300 words".to_string(), "2".to_string()),
                ("301-600 words".to_string(), "0".to_string()),
                ("601-1000 words".to_string(), "0".to_string()),
                ("1000+ words".to_string(), "0".to_string()),
                ("Thin Content (< 300 words)".to_string(), "1".to_string()),
            ]
        );
        // advisory only
        assert_eq!(report.score, 90);
    }

    #[test]
    fn test_render_entry() {
        assert_eq!(ReportSection::render_entry("Total URLs", "3"), "Total URLs: 3");
        assert_eq!(ReportSection::render_entry("", "https://a.test/"), "https://a.test/");
    }

    #[test]
    fn test_filenames() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        assert_eq!(
            report_filename(ReportFormat::Text, date),
            "seo-analysis-2024-05-01.txt"
        );
        assert_eq!(
            report_filename(ReportFormat::Sheet, date),
            "seo-analysis-2024-05-01.sheet.csv"
        );
        assert_eq!(
            records_filename(RecordFormat::Json, date),
            "crawl-data-2024-05-01.json"
        );
    }
}
