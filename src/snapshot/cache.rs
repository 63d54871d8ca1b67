//! Snapshot store and data-access traits
//!
//! A snapshot is the collector's read-only record of prior AWS API calls,
//! keyed by service, call, region and, for detail calls, resource id.
//! Checks never talk to AWS directly; they read the snapshot through the
//! narrow query traits defined here.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::backup::{BackupPlanDetail, BackupPlanSummary};

/// One cached API call outcome: an error record, a payload, or neither
/// when the collector never completed the call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CacheEntry<T> {
    /// Error recorded by the collector, if the call failed.
    pub err: Option<ApiError>,
    /// Payload recorded by the collector, if the call succeeded.
    pub data: Option<T>,
}

/// Error record the collector stores alongside a failed API call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Human-readable error text, when the collector captured one.
    pub message: Option<String>,
}

/// A failed snapshot query, as seen by a check.
///
/// Raised both when the collector recorded an error and when the cached
/// entry is missing or has no payload. The two cases are told apart only
/// by whether an error message survived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    /// Collector error text, when one was recorded.
    pub message: Option<String>,
}

impl QueryError {
    const fn empty() -> Self {
        Self { message: None }
    }

    fn from_entry(err: Option<&ApiError>) -> Self {
        Self {
            message: err.and_then(|e| e.message.clone()),
        }
    }
}

/// Read-only access to the cached `listBackupPlans` call.
pub trait PlanLister {
    /// Backup plan summaries cached for `region`.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] when the region has no cached entry, the
    /// collector recorded an error, or the entry carries no payload.
    fn list_plans(&self, region: &str) -> Result<&[BackupPlanSummary], QueryError>;
}

/// Read-only access to the cached `getBackupPlan` call.
pub trait PlanDescriber {
    /// The cached plan detail for `plan_id` in `region`.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] when the plan has no cached entry, the
    /// collector recorded an error, or the entry carries no payload.
    fn describe_plan(&self, region: &str, plan_id: &str) -> Result<&BackupPlanDetail, QueryError>;
}

/// Cached AWS Backup API calls, keyed the way the collector writes them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BackupCache {
    #[serde(rename = "listBackupPlans", default)]
    list_backup_plans: BTreeMap<String, CacheEntry<Vec<BackupPlanSummary>>>,
    #[serde(rename = "getBackupPlan", default)]
    get_backup_plan: BTreeMap<String, BTreeMap<String, CacheEntry<BackupPlanDetail>>>,
}

/// A parsed collector snapshot.
///
/// Regions and services the collector never visited are simply absent;
/// queries against them fail with an empty [`QueryError`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    backup: BackupCache,
}

impl Snapshot {
    /// Parses a snapshot from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not valid snapshot JSON.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse snapshot JSON")
    }

    /// Reads and parses a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
        Self::parse(&text)
    }

    /// Regions with a cached `listBackupPlans` entry, in sorted order.
    #[must_use]
    pub fn backup_regions(&self) -> Vec<String> {
        self.backup.list_backup_plans.keys().cloned().collect()
    }
}

impl PlanLister for Snapshot {
    fn list_plans(&self, region: &str) -> Result<&[BackupPlanSummary], QueryError> {
        let entry = self
            .backup
            .list_backup_plans
            .get(region)
            .ok_or_else(QueryError::empty)?;
        if entry.err.is_some() {
            return Err(QueryError::from_entry(entry.err.as_ref()));
        }
        entry.data.as_deref().ok_or_else(QueryError::empty)
    }
}

impl PlanDescriber for Snapshot {
    fn describe_plan(&self, region: &str, plan_id: &str) -> Result<&BackupPlanDetail, QueryError> {
        let entry = self
            .backup
            .get_backup_plan
            .get(region)
            .and_then(|plans| plans.get(plan_id))
            .ok_or_else(QueryError::empty)?;
        if entry.err.is_some() {
            return Err(QueryError::from_entry(entry.err.as_ref()));
        }
        entry.data.as_ref().ok_or_else(QueryError::empty)
    }
}
