//! Tests for CLI argument parsing.

use clap::Parser;
use crawl_audit::config::Opt;
use crawl_audit::{Config, LogFormat, LogLevel, RecordFormat, ReportFormat};
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let opt = Opt::try_parse_from(["crawl_audit", "internal_all.csv"]).expect("Should parse");
    assert_eq!(opt.file, PathBuf::from("internal_all.csv"));
    assert!(matches!(opt.log_level, LogLevel::Info));
    assert!(matches!(opt.log_format, LogFormat::Plain));
    assert_eq!(opt.formats, vec![ReportFormat::Text]);
    assert_eq!(opt.output_dir, None);
    assert_eq!(opt.export_records, None);
    assert_eq!(opt.max_export_rows, 1000);
    assert_eq!(opt.summary_rows, 10);
    assert!(!opt.print_summary);
}

#[test]
fn test_repeated_formats() {
    let opt = Opt::try_parse_from([
        "crawl_audit",
        "crawl.csv",
        "--format",
        "csv",
        "--format",
        "json",
        "--format",
        "sheet",
    ])
    .expect("Should parse");
    assert_eq!(
        opt.formats,
        vec![ReportFormat::Csv, ReportFormat::Json, ReportFormat::Sheet]
    );
}

#[test]
fn test_all_options() {
    let opt = Opt::try_parse_from([
        "crawl_audit",
        "-",
        "--output-dir",
        "reports",
        "--export-records",
        "json",
        "--max-export-rows",
        "50",
        "--summary-rows",
        "5",
        "--print-summary",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--openai-api-key",
        "sk-test",
    ])
    .expect("Should parse");

    let config = Config::from(opt);
    assert_eq!(config.file, PathBuf::from("-"));
    assert_eq!(config.output_dir, Some(PathBuf::from("reports")));
    assert_eq!(config.export_records, Some(RecordFormat::Json));
    assert_eq!(config.max_export_rows, 50);
    assert_eq!(config.summary_rows, 5);
    assert!(config.print_summary);
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
}

#[test]
fn test_rejects_unknown_format() {
    let result = Opt::try_parse_from(["crawl_audit", "crawl.csv", "--format", "xlsx"]);
    assert!(result.is_err());
}

#[test]
fn test_requires_file() {
    assert!(Opt::try_parse_from(["crawl_audit"]).is_err());
}

#[test]
fn test_rejects_negative_row_cap() {
    let result = Opt::try_parse_from(["crawl_audit", "crawl.csv", "--max-export-rows", "-1"]);
    assert!(result.is_err());
}
