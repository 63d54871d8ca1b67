//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.
//! Snapshot builders assemble the collector's exact JSON wire shape so the
//! tests double as a contract check on the cache layout.

use serde_json::{json, Value};

use crate::snapshot::Snapshot;

/// Parse a snapshot from an in-memory JSON value, panicking on shape errors.
#[must_use]
pub fn snapshot_from_json(value: Value) -> Snapshot {
    serde_json::from_value(value).expect("test snapshot JSON should match the wire shape")
}

/// The plan-list payload used across Backup tests: one plan, full metadata.
#[must_use]
pub fn sample_plan_list() -> Value {
    json!([
        {
            "BackupPlanArn": "arn:aws:backup:us-east-1:000011112222:backup-plan:07ade659-ed39-4a80-a62c-267828ca315a",
            "BackupPlanId": "07ade659-ed39-4a80-a62c-267828ca315a",
            "CreationDate": "2022-01-21T16:19:55.937000+05:00",
            "VersionId": "YTY2NGEzZjMtODQxZC00OTlhLTg0MTYtODQ3NWNhNjg3NWUz",
            "BackupPlanName": "mine1"
        }
    ])
}

/// A plan-detail payload with one `DailyBackups` rule and the given
/// lifecycle windows (`None` serializes as an explicit JSON null).
#[must_use]
pub fn sample_plan_detail(
    delete_after_days: Option<u32>,
    move_to_cold_storage_after_days: Option<u32>,
) -> Value {
    json!({
        "BackupPlan": {
            "BackupPlanName": "mine1",
            "Rules": [
                {
                    "RuleName": "DailyBackups",
                    "TargetBackupVaultName": "Default",
                    "ScheduleExpression": "cron(0 5 ? * * *)",
                    "StartWindowMinutes": 480,
                    "CompletionWindowMinutes": 10080,
                    "Lifecycle": {
                        "DeleteAfterDays": delete_after_days,
                        "MoveToColdStorageAfterDays": move_to_cold_storage_after_days
                    },
                    "RuleId": "5e0a4936-0da8-4455-a63c-c63ec62e1474"
                }
            ]
        },
        "BackupPlanId": "07ade659-ed39-4a80-a62c-267828ca315a",
        "VersionId": "YTY2NGEzZjMtODQxZC00OTlhLTg0MTYtODQ3NWNhNjg3NWUz"
    })
}

/// A plan-detail payload whose rule carries no `Lifecycle` object at all.
#[must_use]
pub fn sample_plan_detail_without_lifecycle() -> Value {
    json!({
        "BackupPlan": {
            "BackupPlanName": "mine1",
            "Rules": [
                {
                    "RuleName": "DailyBackups",
                    "TargetBackupVaultName": "Default",
                    "ScheduleExpression": "cron(0 5 ? * * *)",
                    "RuleId": "5e0a4936-0da8-4455-a63c-c63ec62e1474"
                }
            ]
        },
        "BackupPlanId": "07ade659-ed39-4a80-a62c-267828ca315a"
    })
}

/// Builds a one-region snapshot with successful list and describe entries.
///
/// When `plans` is a non-empty array, the describe entry is keyed by the
/// first plan's `BackupPlanId`, the way the collector caches it.
#[must_use]
pub fn snapshot_with_plans(region: &str, plans: Value, detail: Value) -> Snapshot {
    let detail_entries = first_plan_id(&plans).map_or_else(
        || json!({}),
        |id| json!({ id: { "data": detail, "err": null } }),
    );

    snapshot_from_json(json!({
        "backup": {
            "listBackupPlans": {
                region: { "err": null, "data": plans }
            },
            "getBackupPlan": {
                region: detail_entries
            }
        }
    }))
}

/// Builds a one-region snapshot whose list entry carries a collector error.
#[must_use]
pub fn snapshot_with_list_error(region: &str, message: Option<&str>) -> Snapshot {
    snapshot_from_json(json!({
        "backup": {
            "listBackupPlans": {
                region: { "err": { "message": message }, "data": null }
            }
        }
    }))
}

/// Builds a one-region snapshot with a successful list entry and a failed
/// describe entry for the first listed plan.
#[must_use]
pub fn snapshot_with_detail_error(region: &str, plans: Value, message: Option<&str>) -> Snapshot {
    let plan_id = first_plan_id(&plans).expect("plans payload should contain at least one plan");

    snapshot_from_json(json!({
        "backup": {
            "listBackupPlans": {
                region: { "err": null, "data": plans }
            },
            "getBackupPlan": {
                region: {
                    plan_id: { "data": null, "err": { "message": message } }
                }
            }
        }
    }))
}

fn first_plan_id(plans: &Value) -> Option<String> {
    plans
        .as_array()
        .and_then(|list| list.first())
        .and_then(|plan| plan.get("BackupPlanId"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
