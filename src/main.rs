//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `crawl_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use crawl_audit::config::Opt;
use crawl_audit::initialization::init_logger_with;
use crawl_audit::{run_audit, Config};

fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // OPENAI_API_KEY may live there instead of the shell environment
    if dotenvy::dotenv().is_err() {
        // If .env not found in current dir, try next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config: Config = Opt::parse().into();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_audit(&config) {
        Ok(outcome) => {
            // Reports may be on stdout, so the summary goes to stderr
            eprintln!(
                "✅ Audited {} URL{}: SEO score {} ({}), {} issue{} in {:.1}s",
                outcome.report.analysis.total_urls,
                if outcome.report.analysis.total_urls == 1 { "" } else { "s" },
                outcome.report.score,
                outcome.report.grade().as_str(),
                outcome.report.analysis.seo_issues.total(),
                if outcome.report.analysis.seo_issues.total() == 1 { "" } else { "s" },
                outcome.elapsed_seconds
            );
            for path in &outcome.written {
                eprintln!("Saved {}", path.display());
            }
            if !outcome.failed_exports.is_empty() {
                eprintln!(
                    "crawl_audit error: failed exports: {}",
                    outcome.failed_exports.join(", ")
                );
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("crawl_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
