//! crawl_audit library: SEO health analysis of site-crawl exports
//!
//! This library parses semicolon-delimited crawl exports (Screaming Frog
//! style), normalizes them into canonical records and computes an SEO-health
//! [`Analysis`]: status and content type distributions, length buckets,
//! missing and duplicate elements, critical status codes and insights. The
//! analysis can be exported as text, CSV, JSON or a spreadsheet sheet.
//!
//! # Example
//!
//! ```
//! use crawl_audit::{analyze, normalize_records, parse_crawl_text, seo_score};
//!
//! let table = parse_crawl_text(
//!     "Address;Status Code;Title 1\nhttps://example.com/;200;Home\nhttps://example.com/old;404;\n",
//! )?;
//! let records = normalize_records(&table.rows);
//! let analysis = analyze(&records);
//!
//! assert_eq!(analysis.total_urls, 2);
//! assert_eq!(analysis.detailed_issues.critical_issues, vec!["https://example.com/old"]);
//! println!("SEO score: {}", seo_score(&analysis));
//! # Ok::<(), crawl_audit::IngestError>(())
//! ```
//!
//! The CLI ties the pipeline together through [`run_audit`].

mod analysis;
mod app;
pub mod config;
mod error_handling;
pub mod export;
mod ingest;
pub mod initialization;
mod models;
mod normalize;
mod session;
mod summary;
mod validation;

// Re-export public API
pub use analysis::{
    analyze, generate_insights, is_thin_content, seo_score, word_count_range, LengthRule,
    ScoreGrade, H1_RULE, META_DESCRIPTION_RULE, TITLE_RULE,
};
pub use config::{Config, LogFormat, LogLevel, RecordFormat, ReportFormat};
pub use error_handling::{ExportError, IngestError, InitializationError};
pub use export::AnalysisReport;
pub use ingest::{parse_crawl_export, parse_crawl_text, read_crawl_export};
pub use models::{
    Analysis, CrawlDataset, CrawlRecord, DetailedIssues, IssueKind, IssueTally, LengthBucket,
    LengthClass, RawFieldArchive, RawRecord, RawTable, WordCountBucket, WordCountRange,
};
pub use normalize::{normalize_record, normalize_records, normalize_table};
pub use run::{run_audit, AuditOutcome};
pub use session::{AnalysisTicket, AuditSession};
pub use summary::{assistant_system_prompt, crawl_summary};
pub use validation::{validate_crawl_data, validate_url, ValidationIssue};

// Internal run module (contains the audit pipeline)
mod run {
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use chrono::{NaiveDate, Utc};
    use log::{error, info};

    use crate::app::{print_analysis_statistics, print_simple_summary, print_validation_warnings};
    use crate::config::{Config, RecordFormat, ReportFormat};
    use crate::error_handling::ExportError;
    use crate::export::{
        open_output, records_filename, report_filename, write_records_csv, write_records_json,
        write_report, AnalysisReport,
    };
    use crate::ingest::read_crawl_export;
    use crate::session::AuditSession;
    use crate::summary::assistant_system_prompt;
    use crate::validation::{validate_crawl_data, ValidationIssue};

    /// Results of an audit run.
    #[derive(Debug, Clone)]
    pub struct AuditOutcome {
        /// The analysis and its score
        pub report: AnalysisReport,
        /// Validation findings (advisory)
        pub validation_issues: Vec<ValidationIssue>,
        /// Files written under the output directory
        pub written: Vec<PathBuf>,
        /// Exports that failed; the analysis is still returned
        pub failed_exports: Vec<String>,
        /// Assistant system prompt, when requested
        pub assistant_prompt: Option<String>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an audit with the provided configuration.
    ///
    /// Reads the crawl export, validates and analyzes it, logs statistics and
    /// writes the requested reports. Reports go to `config.output_dir` when
    /// set, and to stdout otherwise.
    ///
    /// # Errors
    ///
    /// Fails if the crawl export cannot be read or the output directory
    /// cannot be created. A failing individual export is logged and listed
    /// in [`AuditOutcome::failed_exports`] instead.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use crawl_audit::{run_audit, Config};
    /// use std::path::PathBuf;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config {
    ///     file: PathBuf::from("internal_all.csv"),
    ///     output_dir: Some(PathBuf::from("reports")),
    ///     ..Default::default()
    /// };
    /// let outcome = run_audit(&config)?;
    /// println!("SEO score {}", outcome.report.score);
    /// # Ok(())
    /// # }
    /// ```
    pub fn run_audit(config: &Config) -> Result<AuditOutcome> {
        let start_time = Instant::now();

        let table = read_crawl_export(&config.file).with_context(|| {
            format!("Failed to load crawl export {}", config.file.display())
        })?;
        info!(
            "Loaded {} rows ({} columns) from {}",
            table.len(),
            table.headers.len(),
            config.file.display()
        );

        let mut session = AuditSession::new();
        session.load_dataset(table);

        let validation_issues = validate_crawl_data(&session.dataset().records);
        print_validation_warnings(&validation_issues);

        let report = AnalysisReport::new(session.analyze_now().clone());
        print_analysis_statistics(&report);

        if let Some(dir) = &config.output_dir {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create output directory {}", dir.display())
            })?;
        }

        let today = Utc::now().date_naive();
        let mut written = Vec::new();
        let mut failed_exports = Vec::new();

        for &format in &config.formats {
            let target = report_target(config, format, today);
            let result = open_output(target.as_deref())
                .and_then(|out| write_report(format, &report, out));
            record_export(
                result,
                format!("{:?} report", format),
                target,
                &mut written,
                &mut failed_exports,
            );
        }

        if let Some(format) = config.export_records {
            let target = config
                .output_dir
                .as_ref()
                .map(|dir| dir.join(records_filename(format, today)));
            let result = open_output(target.as_deref()).and_then(|out| match format {
                RecordFormat::Csv => write_records_csv(session.table(), config.max_export_rows, out),
                RecordFormat::Json => {
                    write_records_json(session.dataset(), config.max_export_rows, out)
                }
            });
            if let Ok(count) = &result {
                info!("Exported {} crawl records as {:?}", count, format);
            }
            record_export(
                result.map(|_| ()),
                format!("{:?} records", format),
                target,
                &mut written,
                &mut failed_exports,
            );
        }

        let assistant_prompt = config
            .print_summary
            .then(|| assistant_system_prompt(session.table(), config.summary_rows));
        if let Some(prompt) = &assistant_prompt {
            let mut stdout = open_output(None).context("Failed to open stdout")?;
            writeln!(stdout, "{}", prompt).context("Failed to print assistant summary")?;
        }

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_simple_summary(&report, elapsed_seconds);

        Ok(AuditOutcome {
            report,
            validation_issues,
            written,
            failed_exports,
            assistant_prompt,
            elapsed_seconds,
        })
    }

    fn report_target(config: &Config, format: ReportFormat, today: NaiveDate) -> Option<PathBuf> {
        config
            .output_dir
            .as_ref()
            .map(|dir| dir.join(report_filename(format, today)))
    }

    fn record_export(
        result: std::result::Result<(), ExportError>,
        label: String,
        target: Option<PathBuf>,
        written: &mut Vec<PathBuf>,
        failed: &mut Vec<String>,
    ) {
        match (result, target) {
            (Ok(()), Some(path)) => {
                info!("Wrote {} to {}", label, path.display());
                written.push(path);
            }
            (Ok(()), None) => {}
            (Err(e), _) => {
                error!("Failed to export {}: {}", label, e);
                failed.push(label);
            }
        }
    }
}
