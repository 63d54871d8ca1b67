//! JSONL (JSON Lines) logging for scan history
//!
//! Provides append-only logging of scan outcomes to `<log_dir>/history.jsonl`

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::scan::runner::ScanReport;

/// Summary of a single completed scan, one line of the history log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanOutcome {
    /// ISO 8601 timestamp of when the scan completed
    pub timestamp: DateTime<Utc>,
    /// Snapshot file the scan evaluated
    pub snapshot: String,
    /// Number of checks executed
    pub checks_run: usize,
    /// Number of PASS results
    pub passed: usize,
    /// Number of WARN results
    pub warnings: usize,
    /// Number of FAIL results
    pub failed: usize,
    /// Number of UNKNOWN results
    pub unknown: usize,
    /// Wall-clock duration of the scan in milliseconds
    pub duration_ms: u64,
}

impl ScanOutcome {
    /// Summarizes a finished report for the history log.
    #[must_use]
    pub fn from_report(report: &ScanReport, snapshot: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            snapshot: snapshot.to_string(),
            checks_run: report.checks.len(),
            passed: report.pass_count(),
            warnings: report.warn_count(),
            failed: report.fail_count(),
            unknown: report.unknown_count(),
            duration_ms: report.duration_ms,
        }
    }
}

/// JSONL logger for scan history
///
/// Provides append-only logging to `<log_dir>/history.jsonl`.
/// Each line is a JSON object representing a single scan outcome.
pub struct HistoryLogger {
    log_path: PathBuf,
}

impl HistoryLogger {
    /// Create a new history logger
    ///
    /// # Errors
    /// Returns an error if the log directory cannot be created
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let log_dir = log_dir.as_ref();

        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let log_path = log_dir.join("history.jsonl");

        Ok(Self { log_path })
    }

    /// Append a scan outcome to the log
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be opened or created
    /// - The outcome cannot be serialized to JSON
    /// - Writing to the file fails
    pub fn append(&self, outcome: &ScanOutcome) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        let json =
            serde_json::to_string(outcome).context("Failed to serialize scan outcome to JSON")?;

        writeln!(file, "{json}").context("Failed to write to log file")?;

        Ok(())
    }

    /// Read all scan outcomes from the log, in chronological order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be read
    /// - Any line cannot be parsed as valid JSON
    pub fn read_all(&self) -> Result<Vec<ScanOutcome>> {
        // If the log file doesn't exist yet, return an empty vector
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)
            .with_context(|| format!("Failed to read log file: {}", self.log_path.display()))?;

        let mut outcomes = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let outcome: ScanOutcome = serde_json::from_str(line)
                .with_context(|| format!("Failed to parse line {} as JSON", line_num + 1))?;

            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Get the path to the log file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
