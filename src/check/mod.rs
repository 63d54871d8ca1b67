//! Compliance checks
//!
//! This module holds the check interface, result types, the built-in
//! registry, and the checks themselves grouped by service.

pub mod backup;
pub mod registry;
pub mod result;

pub use registry::{builtin_checks, Check, CheckInfo};
pub use result::{CheckResult, Status};
