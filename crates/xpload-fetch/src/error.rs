//! Error types for xpload-fetch.

use std::io;

use thiserror::Error;

use crate::data::FetchResult;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("transfer failed after {byte_count} bytes: {message}")]
    Transport { byte_count: u64, message: String },

    #[error("HTTP error: status {status}")]
    Http { status: u16, byte_count: u64 },

    #[error("unexpected catalog response: {source}")]
    Parse {
        status: u16,
        byte_count: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("failed to start fetch runtime: {0}")]
    Runtime(#[source] io::Error),
}

impl FetchError {
    /// The empty result a failed fetch is reported as, keeping the
    /// transfer metrics observed before the failure.
    pub fn degraded(&self) -> FetchResult {
        match self {
            FetchError::Transport { byte_count, .. } => FetchResult::empty(*byte_count, 0),
            FetchError::Http { status, byte_count }
            | FetchError::Parse {
                status, byte_count, ..
            } => FetchResult::empty(*byte_count, *status),
            FetchError::InvalidUrl(_) | FetchError::Client(_) | FetchError::Runtime(_) => {
                FetchResult::empty(0, 0)
            }
        }
    }
}
