//! Immutable data types for catalog queries.
//!
//! Requests, options and results are plain values passed between the
//! pure [`core`](crate::core) functions and the effectful
//! [`Fetcher`](crate::Fetcher).

pub mod options;
pub mod record;
pub mod request;

pub use options::FetchOptions;
pub use record::{CatalogEntry, CatalogRecord, CatalogResponse, Component, PayloadIov};
pub use request::{FetchResult, PayloadRequest};
