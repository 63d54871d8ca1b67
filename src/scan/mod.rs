//! Scan orchestration
//!
//! This module handles scan configuration, runtime settings, and the
//! runner that executes checks against a snapshot.

pub mod config;
pub mod runner;

pub use config::{CheckToggle, GlobalConfig, ScanConfig, ScanSettings};
pub use runner::{CheckReport, ScanReport, ScanRunner};
