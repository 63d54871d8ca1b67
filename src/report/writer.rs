//! Report file writer for external observability
//!
//! Manages `<log_dir>/report.json`, a single JSON file holding the latest
//! scan report. External tools can read this file instead of parsing
//! terminal output.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::scan::runner::ScanReport;

/// Writes the latest scan report to `<log_dir>/report.json`
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    /// Create a new `ReportWriter` targeting `<log_dir>/report.json`.
    pub fn new(log_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
        Ok(Self {
            path: log_dir.join("report.json"),
        })
    }

    /// Atomically write the report to the file (write to temp, then rename).
    pub fn write(&self, report: &ScanReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes())
            .with_context(|| format!("Failed to write temp file: {}", tmp_path.display()))?;
        std::fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }

    /// Get the path to the report file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
