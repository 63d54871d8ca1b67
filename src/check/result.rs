//! Check statuses and per-region results
//!
//! Every check reports its findings as one [`CheckResult`] per region,
//! carrying a fixed numeric status code so downstream consumers can key
//! on it without parsing message text.

use std::fmt;

use serde::{Serialize, Serializer};

/// Outcome classification for a single check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The examined resources satisfy the check.
    Pass,
    /// Suspicious but not a violation. Reserved; no built-in check emits it.
    Warn,
    /// At least one examined resource violates the check.
    Fail,
    /// The snapshot could not answer the question.
    Unknown,
}

impl Status {
    /// The fixed numeric code: 0 PASS, 1 WARN, 2 FAIL, 3 UNKNOWN.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Pass => 0,
            Self::Warn => 1,
            Self::Fail => 2,
            Self::Unknown => 3,
        }
    }

    /// Uppercase label for terminal output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// The result contract serializes statuses as their numeric codes.
impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

/// A single per-region result produced by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Outcome classification.
    pub status: Status,
    /// Human-readable explanation of the outcome.
    pub message: String,
    /// Region the result applies to.
    pub region: String,
}

impl CheckResult {
    /// Builds a PASS result for `region`.
    #[must_use]
    pub fn pass(region: &str, message: &str) -> Self {
        Self::new(Status::Pass, region, message)
    }

    /// Builds a FAIL result for `region`.
    #[must_use]
    pub fn fail(region: &str, message: &str) -> Self {
        Self::new(Status::Fail, region, message)
    }

    /// Builds an UNKNOWN result for `region`.
    #[must_use]
    pub fn unknown(region: &str, message: &str) -> Self {
        Self::new(Status::Unknown, region, message)
    }

    fn new(status: Status, region: &str, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
            region: region.to_string(),
        }
    }
}
