//! Rich terminal rendering for scan reports
//!
//! Renders a scan report as human-readable terminal output.
//! All output goes to stderr so stdout remains clean for piping.

use colored::Colorize;

use crate::check::result::Status;
use crate::scan::runner::{CheckReport, ScanReport};

/// Display handler for scan report output
pub struct ReportDisplay {
    snapshot_label: String,
}

impl ReportDisplay {
    /// Create a new display handler labeled with the scanned snapshot
    #[must_use]
    pub fn new(snapshot_label: &str) -> Self {
        Self {
            snapshot_label: snapshot_label.to_string(),
        }
    }

    /// Print the scan header at the start of execution
    pub fn print_header(&self) {
        eprintln!(
            "\n{} {}",
            "===".bold().cyan(),
            format!("Scan: {}", self.snapshot_label).bold().cyan()
        );
        eprintln!("{}", "─".repeat(50).dimmed());
    }

    /// Render the full report to stderr
    pub fn render(&self, report: &ScanReport) {
        for check in &report.checks {
            render_check(check);
        }
        self.render_summary(report);
    }

    /// Render the post-scan summary
    fn render_summary(&self, report: &ScanReport) {
        eprintln!("{}", "─".repeat(50).dimmed());

        let status = if report.has_failures() {
            "NONCOMPLIANT".red().bold().to_string()
        } else {
            "COMPLIANT".green().bold().to_string()
        };
        eprintln!("  {} {}", status, self.snapshot_label.bold());

        eprintln!(
            "  {} {} check(s) | {} passed | {} failed | {} unknown | {}ms",
            "Summary:".dimmed(),
            report.checks.len(),
            report.pass_count(),
            report.fail_count(),
            report.unknown_count(),
            report.duration_ms
        );

        if report.warn_count() > 0 {
            eprintln!(
                "  {} {} warning(s)",
                "⚠".yellow().bold(),
                report.warn_count()
            );
        }

        eprintln!();
    }
}

/// Render one check's title line and per-region results
fn render_check(check: &CheckReport) {
    eprintln!(
        "  {} {} {}",
        "▶".blue(),
        check.title.bold(),
        format!("[{}]", check.id).dimmed()
    );

    if check.results.is_empty() {
        eprintln!("    {}", "no regions evaluated".dimmed());
        return;
    }

    for result in &check.results {
        eprintln!(
            "    {} {}  {}",
            status_tag(result.status),
            result.region.bold(),
            result.message
        );
    }
}

/// Colorize a status label for terminal output
fn status_tag(status: Status) -> String {
    let label = status.label();
    match status {
        Status::Pass => label.green().bold(),
        Status::Warn => label.yellow().bold(),
        Status::Fail => label.red().bold(),
        Status::Unknown => label.yellow(),
    }
    .to_string()
}
