//! Cached AWS Backup payload shapes
//!
//! Typed models of the collector's `Backup:listBackupPlans` and
//! `Backup:getBackupPlan` responses. Field names mirror the AWS wire format;
//! metadata fields no check reads are ignored on deserialization.

use serde::Deserialize;

/// One entry of the cached `listBackupPlans` response for a region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackupPlanSummary {
    /// Unique identifier of the backup plan.
    #[serde(rename = "BackupPlanId", default)]
    pub backup_plan_id: String,
}

/// The cached `getBackupPlan` response for a single plan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackupPlanDetail {
    /// The plan body; absent when the collector cached a partial response.
    #[serde(rename = "BackupPlan", default)]
    pub backup_plan: Option<BackupPlan>,
}

impl BackupPlanDetail {
    /// The plan's rules, or an empty slice when the plan body is absent.
    #[must_use]
    pub fn rules(&self) -> &[BackupRule] {
        self.backup_plan
            .as_ref()
            .map_or(&[], |plan| plan.rules.as_slice())
    }
}

/// A backup plan body with its scheduled rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackupPlan {
    /// The plan's rules, in the collector's order.
    #[serde(rename = "Rules", default)]
    pub rules: Vec<BackupRule>,
}

/// A single scheduled rule within a backup plan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackupRule {
    /// Rule name as configured in the plan.
    #[serde(rename = "RuleName", default)]
    pub rule_name: String,
    /// Recovery point lifecycle policy, when one is configured.
    #[serde(rename = "Lifecycle", default)]
    pub lifecycle: Option<RuleLifecycle>,
}

impl BackupRule {
    /// Whether this rule has a usable lifecycle policy: the `Lifecycle`
    /// object exists and at least one of its two windows is a non-null
    /// number. An explicit `0` counts as configured.
    #[must_use]
    pub const fn has_lifecycle(&self) -> bool {
        match &self.lifecycle {
            Some(lifecycle) => {
                lifecycle.delete_after_days.is_some()
                    || lifecycle.move_to_cold_storage_after_days.is_some()
            }
            None => false,
        }
    }
}

/// Lifecycle policy attached to a backup rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RuleLifecycle {
    /// Days after creation when the recovery point is deleted.
    #[serde(rename = "DeleteAfterDays")]
    pub delete_after_days: Option<u32>,
    /// Days after creation when the recovery point moves to cold storage.
    #[serde(rename = "MoveToColdStorageAfterDays")]
    pub move_to_cold_storage_after_days: Option<u32>,
}
