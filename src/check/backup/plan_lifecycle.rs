//! Backup plan lifecycle compliance
//!
//! Verifies that the rules of the Backup plan selected in each region carry
//! a lifecycle policy, so recovery points are transitioned to cold storage
//! and/or expired instead of being retained forever.

use crate::check::registry::{Check, CheckInfo};
use crate::check::result::CheckResult;
use crate::scan::ScanSettings;
use crate::snapshot::backup::BackupRule;
use crate::snapshot::{PlanDescriber, PlanLister, QueryError, Snapshot};

const QUERY_FAILED: &str = "Unable to query Backup plans";
const NO_PLANS: &str = "No Backup plans found";
const LIFECYCLE_MISSING: &str =
    "No lifecycle configuration enabled for the selected Amazon Backup plan";
const LIFECYCLE_ENABLED: &str =
    "Lifecycle configuration enabled for the selected Amazon Backup plan";

const INFO: CheckInfo = CheckInfo {
    id: "backup-plan-lifecycle",
    title: "Backup Plan Lifecycle Configured",
    category: "Backup",
    description: "Ensures Amazon Backup plan rules have a lifecycle that transitions recovery points to cold storage or expires them.",
    recommendation: "Configure transition-to-cold-storage and expiration windows on each Backup plan rule.",
    apis: &["Backup:listBackupPlans", "Backup:getBackupPlan"],
};

/// The Backup plan lifecycle check.
pub struct PlanLifecycle;

impl Check for PlanLifecycle {
    fn info(&self) -> &'static CheckInfo {
        &INFO
    }

    fn run(&self, snapshot: &Snapshot, settings: &ScanSettings) -> Vec<CheckResult> {
        evaluate(snapshot, &settings.resolve_regions(snapshot))
    }
}

/// Evaluates lifecycle compliance for each region, in input order.
///
/// Emits exactly one result per region: UNKNOWN when the snapshot cannot
/// answer, PASS when no plans exist or every examined rule has a lifecycle,
/// FAIL when any examined rule lacks one. Regions are independent; one
/// region's outcome never affects the next.
pub fn evaluate<S>(source: &S, regions: &[String]) -> Vec<CheckResult>
where
    S: PlanLister + PlanDescriber,
{
    regions
        .iter()
        .map(|region| evaluate_region(source, region))
        .collect()
}

fn evaluate_region<S>(source: &S, region: &str) -> CheckResult
where
    S: PlanLister + PlanDescriber,
{
    let plans = match source.list_plans(region) {
        Ok(plans) => plans,
        Err(err) => return CheckResult::unknown(region, &query_failure_message(&err)),
    };

    if plans.is_empty() {
        return CheckResult::pass(region, NO_PLANS);
    }

    // Only the first listed plan is examined per region.
    let detail = match source.describe_plan(region, &plans[0].backup_plan_id) {
        Ok(detail) => detail,
        Err(err) => return CheckResult::unknown(region, &query_failure_message(&err)),
    };

    if detail.rules().iter().all(BackupRule::has_lifecycle) {
        CheckResult::pass(region, LIFECYCLE_ENABLED)
    } else {
        CheckResult::fail(region, LIFECYCLE_MISSING)
    }
}

fn query_failure_message(err: &QueryError) -> String {
    err.message.as_ref().map_or_else(
        || QUERY_FAILED.to_string(),
        |text| format!("{QUERY_FAILED}: {text}"),
    )
}
