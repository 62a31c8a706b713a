//! # maldet-cli
//!
//! Argument parsing and rendering for the `maldet` binary. Kept in a
//! library so the output paths can be tested without spawning a process.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use maldet_core::config::CliOverrides;
use maldet_core::constants::SUMMARY_TOP_CONTRIBUTIONS;
use maldet_core::{ConfigError, Explanation, MaldetConfig, MaldetErrorCode};
use maldet_scoring::Detector;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

pub const MISSING_URL_HINT: &str =
    "Provide --url 'https://example.com/path' to score a single URL";

/// Score a single URL with the lexical detector and print the breakdown.
#[derive(Debug, Parser)]
#[command(name = "maldet", version, about)]
pub struct Cli {
    /// URL to score
    #[arg(long)]
    pub url: Option<String>,

    /// Decision threshold (default: config value, else 2.5)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Print the full explanation as JSON
    #[arg(long)]
    pub json: bool,

    /// Explicit config file instead of ./maldet.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Execute `cli`, writing results to `out` and diagnostics to `err`.
/// Returns the process exit code.
pub fn run(cli: &Cli, cwd: &Path, out: &mut impl Write, err: &mut impl Write) -> i32 {
    let Some(url) = cli.url.as_deref() else {
        let _ = writeln!(err, "{MISSING_URL_HINT}");
        return EXIT_USAGE;
    };

    if let Some(threshold) = cli.threshold.filter(|t| !t.is_finite()) {
        let e = ConfigError::InvalidValue {
            field: "--threshold".to_string(),
            message: format!("{threshold} is not a finite number"),
        };
        let _ = writeln!(err, "{}", e.coded_string());
        return EXIT_FAILURE;
    }

    let overrides = CliOverrides {
        threshold: cli.threshold,
        suffix_list_path: None,
    };
    let loaded = match &cli.config {
        Some(path) => MaldetConfig::load_file(path, Some(&overrides)),
        None => MaldetConfig::load(cwd, Some(&overrides)),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            let _ = writeln!(err, "{}", e.coded_string());
            return EXIT_FAILURE;
        }
    };
    let detector = match Detector::from_config(&config) {
        Ok(detector) => detector,
        Err(e) => {
            let _ = writeln!(err, "{}", e.coded_string());
            return EXIT_FAILURE;
        }
    };

    let explanation = detector.explain(url);
    let rendered = if cli.json {
        match serde_json::to_string_pretty(&explanation) {
            Ok(json) => json,
            Err(e) => {
                let _ = writeln!(err, "failed to encode explanation: {e}");
                return EXIT_FAILURE;
            }
        }
    } else {
        render_summary(&explanation)
    };

    match writeln!(out, "{rendered}") {
        Ok(()) => EXIT_OK,
        Err(e) => {
            tracing::error!(error = %e, "failed to write output");
            EXIT_FAILURE
        }
    }
}

/// Human-readable summary: header lines, then the largest contributions.
pub fn render_summary(explanation: &Explanation) -> String {
    let mut lines = vec![
        format!("URL : {}", explanation.url),
        format!(
            "SCORE: {:.4}  THRESHOLD: {:?}",
            explanation.score, explanation.threshold
        ),
        format!("LABEL: {}", explanation.label.verdict()),
        "Top contributions:".to_string(),
    ];
    for (name, value) in explanation.top_contributions(SUMMARY_TOP_CONTRIBUTIONS) {
        lines.push(format!("  {name:20} -> {value:.4}"));
    }
    lines.join("\n")
}
