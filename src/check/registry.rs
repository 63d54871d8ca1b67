//! Check metadata and the built-in registry
//!
//! Every check carries a static metadata header and implements [`Check`].
//! The registry lists the built-in checks in stable execution order.

use crate::scan::ScanSettings;
use crate::snapshot::Snapshot;

use super::result::CheckResult;

/// Static metadata describing a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckInfo {
    /// Stable identifier used in config files and reports.
    pub id: &'static str,
    /// Short human-readable title.
    pub title: &'static str,
    /// Service category the check belongs to.
    pub category: &'static str,
    /// What the check verifies.
    pub description: &'static str,
    /// How to remediate a failing result.
    pub recommendation: &'static str,
    /// Cached API calls the check reads, as `Service:call` names.
    pub apis: &'static [&'static str],
}

/// Interface implemented by every compliance check.
///
/// `run` never returns an error: anticipated failures are reported as
/// UNKNOWN results rather than raised.
pub trait Check {
    /// The check's static metadata header.
    fn info(&self) -> &'static CheckInfo;

    /// Evaluates the check against `snapshot`, returning one result per
    /// examined region.
    fn run(&self, snapshot: &Snapshot, settings: &ScanSettings) -> Vec<CheckResult>;
}

/// All built-in checks, in execution order.
#[must_use]
pub fn builtin_checks() -> Vec<Box<dyn Check>> {
    vec![Box::new(super::backup::PlanLifecycle)]
}

/// Whether `id` names a built-in check.
#[must_use]
pub fn is_builtin(id: &str) -> bool {
    builtin_checks().iter().any(|check| check.info().id == id)
}
