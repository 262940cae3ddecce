use std::time::Duration;

use chrono::{DateTime, Utc};
use xpload_fetch::FetchResult;

/// How a fetch compared with the payload its token predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ok = 0,
    /// The catalog did not resolve to exactly one path.
    SizeMismatch = 1,
    /// One path came back, but not the expected one.
    PathMismatch = 2,
}

impl Outcome {
    pub fn classify(result: &FetchResult, expected_path: &str) -> Self {
        match result.single_path() {
            None => Outcome::SizeMismatch,
            Some(path) if path != expected_path => Outcome::PathMismatch,
            Some(_) => Outcome::Ok,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_ok(self) -> bool {
        self == Outcome::Ok
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ok => write!(f, "OK"),
            Outcome::SizeMismatch => write!(f, "SIZE MISMATCH"),
            Outcome::PathMismatch => write!(f, "PATH MISMATCH"),
        }
    }
}

/// One scheduled call as observed by the harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRecord {
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
    /// Seconds waited before the call.
    pub wait: u64,
    pub byte_count: u64,
    pub response_code: u16,
    /// The resolved path, empty unless the call verified.
    pub path: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub records: Vec<VerificationRecord>,
}

impl RunReport {
    pub fn failures(&self) -> usize {
        self.records.iter().filter(|r| !r.outcome.is_ok()).count()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }

    pub fn total_wait(&self) -> u64 {
        self.records.iter().map(|r| r.wait).sum()
    }
}
