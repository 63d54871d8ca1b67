//! Report rendering and persistence
//!
//! This module renders scan reports for the terminal, writes the latest
//! report to disk, and keeps an append-only JSONL scan history.

pub mod display;
pub mod history;
pub mod writer;

pub use display::ReportDisplay;
pub use history::{HistoryLogger, ScanOutcome};
pub use writer::ReportWriter;
