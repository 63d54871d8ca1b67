//! Scan runner
//!
//! Executes every enabled check against a loaded snapshot and aggregates
//! the results into a structured scan report.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::check::registry::{builtin_checks, Check};
use crate::check::result::{CheckResult, Status};
use crate::scan::config::{ScanConfig, ScanSettings};
use crate::snapshot::Snapshot;

/// The results of one check, paired with its identifying metadata.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Check id.
    pub id: String,
    /// Human-readable check title.
    pub title: String,
    /// Service category.
    pub category: String,
    /// One result per examined region.
    pub results: Vec<CheckResult>,
}

/// Aggregated outcome of a full scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// When the scan started.
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration of the scan in milliseconds.
    pub duration_ms: u64,
    /// Per-check reports, in execution order.
    pub checks: Vec<CheckReport>,
}

impl ScanReport {
    /// Total number of results across all checks.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.checks.iter().map(|c| c.results.len()).sum()
    }

    /// Returns the number of PASS results.
    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.count(Status::Pass)
    }

    /// Returns the number of WARN results.
    #[must_use]
    pub fn warn_count(&self) -> usize {
        self.count(Status::Warn)
    }

    /// Returns the number of FAIL results.
    #[must_use]
    pub fn fail_count(&self) -> usize {
        self.count(Status::Fail)
    }

    /// Returns the number of UNKNOWN results.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.count(Status::Unknown)
    }

    /// True when any check produced a FAIL result.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.fail_count() > 0
    }

    fn count(&self, status: Status) -> usize {
        self.checks
            .iter()
            .flat_map(|c| &c.results)
            .filter(|r| r.status == status)
            .count()
    }
}

/// Executes the enabled built-in checks against snapshots.
pub struct ScanRunner {
    settings: ScanSettings,
    checks: Vec<Box<dyn Check>>,
}

impl ScanRunner {
    /// Builds a runner over the built-in checks enabled by `config`.
    #[must_use]
    pub fn new(config: &ScanConfig, settings: ScanSettings) -> Self {
        let checks = builtin_checks()
            .into_iter()
            .filter(|check| config.is_enabled(check.info().id))
            .collect();
        Self { settings, checks }
    }

    /// The settings this runner hands to every check.
    #[must_use]
    pub const fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// Number of checks this runner will execute.
    #[must_use]
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Runs every enabled check against `snapshot`, in registry order.
    #[must_use]
    pub fn run(&self, snapshot: &Snapshot) -> ScanReport {
        let started_at = Utc::now();
        let start = std::time::Instant::now();

        let checks = self
            .checks
            .iter()
            .map(|check| {
                let info = check.info();
                CheckReport {
                    id: info.id.to_string(),
                    title: info.title.to_string(),
                    category: info.category.to_string(),
                    results: check.run(snapshot, &self.settings),
                }
            })
            .collect();

        ScanReport {
            started_at,
            duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            checks,
        }
    }
}
