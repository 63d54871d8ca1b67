//! Stratus - Cloud security posture scanner
//!
//! CLI entry point for the stratus scanner.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use stratus::report::history::{HistoryLogger, ScanOutcome};
use stratus::report::writer::ReportWriter;
use stratus::report::ReportDisplay;
use stratus::scan::config::{ScanConfig, ScanSettings};
use stratus::scan::runner::ScanRunner;
use stratus::snapshot::Snapshot;

/// Config file consulted when `--config` is not given.
const DEFAULT_CONFIG: &str = "stratus.toml";

/// Cloud security posture scanner
///
/// Audits a collector snapshot of cached AWS API calls against the
/// built-in compliance checks and reports per-region results.
#[derive(Parser, Debug)]
#[command(name = "stratus", version, about)]
struct Cli {
    /// Path to the snapshot file to scan
    #[arg(long)]
    snapshot: PathBuf,

    /// Path to the stratus.toml configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for report and history files (.stratus by default)
    #[arg(long, default_value = ".stratus")]
    log_dir: PathBuf,

    /// Regions to evaluate, overriding snapshot discovery
    #[arg(long, value_delimiter = ',')]
    regions: Vec<String>,

    /// Output format: text (stderr) or json (stdout)
    #[arg(long, default_value = "text")]
    format: String,

    /// Exit with code 2 when any check fails
    #[arg(long)]
    exit_code: bool,
}

/// How the finished report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

/// Parse the `--format` flag value.
fn parse_format(value: &str) -> Result<OutputFormat> {
    match value {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("Unknown format '{other}'. Available formats: text, json"),
    }
}

/// Load the scan configuration: an explicit `--config` path must exist,
/// while the default path is used only when present.
fn load_config(path: Option<&Path>) -> Result<ScanConfig> {
    match path {
        Some(path) => ScanConfig::from_path(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display())),
        None => {
            if Path::new(DEFAULT_CONFIG).exists() {
                ScanConfig::from_path(DEFAULT_CONFIG)
                    .with_context(|| format!("Failed to load config from '{DEFAULT_CONFIG}'"))
            } else {
                Ok(ScanConfig::default())
            }
        }
    }
}

/// Merge CLI flags over config file values into the runtime settings.
fn build_settings(config: &ScanConfig, regions: &[String], exit_code: bool) -> ScanSettings {
    let mut settings = ScanSettings::from_config(config);
    if !regions.is_empty() {
        settings.regions = regions.to_vec();
    }
    if exit_code {
        settings.fail_exit_code = true;
    }
    settings
}

/// Exit code for a finished scan: 2 when failures should fail the process.
const fn scan_exit_code(fail_exit_code: bool, has_failures: bool) -> i32 {
    if fail_exit_code && has_failures {
        2
    } else {
        0
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = parse_format(&cli.format)?;
    let config = load_config(cli.config.as_deref())?;
    let settings = build_settings(&config, &cli.regions, cli.exit_code);
    let fail_exit_code = settings.fail_exit_code;

    // Load the snapshot before any output so errors stay on one path
    let snapshot = Snapshot::from_path(&cli.snapshot).await?;
    let snapshot_label = cli.snapshot.display().to_string();

    let runner = ScanRunner::new(&config, settings);
    let display = ReportDisplay::new(&snapshot_label);
    if format == OutputFormat::Text {
        display.print_header();
    }

    let report = runner.run(&snapshot);

    match format {
        OutputFormat::Text => display.render(&report),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{json}");
        }
    }

    // Persist the report and append to the scan history
    ReportWriter::new(&cli.log_dir)?.write(&report)?;
    HistoryLogger::new(&cli.log_dir)
        .context("Failed to initialize history logger")?
        .append(&ScanOutcome::from_report(&report, &snapshot_label))
        .context("Failed to write to scan history")?;

    let code = scan_exit_code(fail_exit_code, report.has_failures());
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
