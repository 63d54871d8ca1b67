//! AWS Backup checks

pub mod plan_lifecycle;

pub use plan_lifecycle::PlanLifecycle;
