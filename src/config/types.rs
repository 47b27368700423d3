//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_MAX_EXPORT_ROWS, DEFAULT_SUMMARY_ROWS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Analysis report formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Labeled sections separated by blank lines
    Text,
    /// `;`-delimited rows mirroring the section layout
    Csv,
    /// Direct structural dump of the analysis
    Json,
    /// Single-column sheet of labeled blocks for spreadsheet tools
    Sheet,
}

impl ReportFormat {
    /// File extension used when the report is written to disk.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Sheet => "sheet.csv",
        }
    }
}

/// Raw crawl record export formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RecordFormat {
    /// `;`-delimited rows in the original column order
    Csv,
    /// Canonical records with their archived extra columns
    Json,
}

impl RecordFormat {
    /// File extension used when the records are written to disk.
    pub fn extension(&self) -> &'static str {
        match self {
            RecordFormat::Csv => "csv",
            RecordFormat::Json => "json",
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// Constructed once at startup and passed explicitly to whatever needs it.
///
/// # Examples
///
/// ```no_run
/// use crawl_audit::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("internal_all.csv"),
///     output_dir: Some(PathBuf::from("reports")),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Crawl export to read (`-` reads stdin)
    pub file: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Report formats to produce
    pub formats: Vec<ReportFormat>,

    /// Directory for report and record files; `None` writes every requested
    /// output to stdout
    pub output_dir: Option<PathBuf>,

    /// Also export the raw crawl records in this format
    pub export_records: Option<RecordFormat>,

    /// Cap on exported raw records
    pub max_export_rows: usize,

    /// Rows included in the assistant summary
    pub summary_rows: usize,

    /// Print the assistant system prompt after the analysis
    pub print_summary: bool,

    /// API key for an assistant collaborator that consumes the summary prompt.
    ///
    /// Carried through from `OPENAI_API_KEY` so embedders get it with the rest
    /// of the config; the audit itself never reads it.
    pub openai_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("internal_all.csv"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            formats: vec![ReportFormat::Text],
            output_dir: None,
            export_records: None,
            max_export_rows: DEFAULT_MAX_EXPORT_ROWS,
            summary_rows: DEFAULT_SUMMARY_ROWS,
            print_summary: false,
            openai_api_key: None,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Text report on stdout
/// crawl_audit internal_all.csv
///
/// # Every report format plus the raw records, written to ./reports
/// crawl_audit internal_all.csv --format text --format csv --format json --format sheet \
///     --output-dir reports --export-records csv
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "crawl_audit",
    about = "Audits a semicolon-delimited site-crawl export and reports SEO health."
)]
pub struct Opt {
    /// Crawl export to read (`-` for stdin)
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format (repeatable): text|csv|json|sheet
    #[arg(long = "format", value_enum, default_values_t = [ReportFormat::Text])]
    pub formats: Vec<ReportFormat>,

    /// Directory for report and record files (all output goes to stdout when omitted)
    #[arg(long, value_parser)]
    pub output_dir: Option<PathBuf>,

    /// Also export the raw crawl records: csv|json
    #[arg(long, value_enum)]
    pub export_records: Option<RecordFormat>,

    /// Maximum number of raw records to export
    #[arg(long, default_value_t = DEFAULT_MAX_EXPORT_ROWS)]
    pub max_export_rows: usize,

    /// Rows included in the assistant summary
    #[arg(long, default_value_t = DEFAULT_SUMMARY_ROWS)]
    pub summary_rows: usize,

    /// Print the assistant system prompt built from the crawl sample
    #[arg(long)]
    pub print_summary: bool,

    /// API key for assistant collaborators
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            file: opt.file,
            log_level: opt.log_level,
            log_format: opt.log_format,
            formats: opt.formats,
            output_dir: opt.output_dir,
            export_records: opt.export_records,
            max_export_rows: opt.max_export_rows,
            summary_rows: opt.summary_rows,
            print_summary: opt.print_summary,
            openai_api_key: opt.openai_api_key.filter(|key| !key.trim().is_empty()),
        }
    }
}
