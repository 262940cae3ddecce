//! Error types for xpload-harness.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("cannot split [0, {span}] by {count} points: need span > 0 and 0 < count <= span + 1")]
    Precondition { span: u64, count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("empty {name} range [{lo}, {hi}]")]
    EmptyRange { name: &'static str, lo: u64, hi: u64 },
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Partition(#[from] PartitionError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("segments sum to {sum}, expected {span}")]
    Coverage { span: u64, sum: u64 },
}
