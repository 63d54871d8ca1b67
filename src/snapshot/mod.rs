//! Collector snapshot model
//!
//! This module models the cached AWS API call record produced by the
//! collector, along with the query traits checks use to read it.

pub mod backup;
pub mod cache;

pub use cache::{ApiError, CacheEntry, PlanDescriber, PlanLister, QueryError, Snapshot};
