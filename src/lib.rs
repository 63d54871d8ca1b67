//! Stratus - Cloud security posture scanner
//!
//! Stratus audits cached AWS API snapshots against compliance checks.
//! It never talks to AWS itself: a collector records API responses into a
//! JSON snapshot, and stratus evaluates every enabled check against it.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod check;
pub mod report;
pub mod scan;
pub mod snapshot;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use check::registry::{builtin_checks, Check, CheckInfo};
pub use check::result::{CheckResult, Status};
pub use report::{HistoryLogger, ReportDisplay, ReportWriter, ScanOutcome};
pub use scan::config::{ScanConfig, ScanSettings};
pub use scan::runner::{CheckReport, ScanReport, ScanRunner};
pub use snapshot::{PlanDescriber, PlanLister, QueryError, Snapshot};
