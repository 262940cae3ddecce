//! Conditions catalog client.
//!
//! Resolves a (tag, domain, validity timestamp) query against the
//! catalog's `payloadiovs` endpoint into payload paths under a local
//! storage root.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable requests, options and results
//! - [`core`] - Pure transformations (URL building, decoding, path resolution)
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Failure model
//!
//! [`Fetcher::fetch`] never fails: transport errors, error statuses and
//! malformed bodies all surface as a [`FetchResult`] with no paths and
//! whatever byte count and status were observed. [`Fetcher::try_fetch`]
//! exposes the same flow with a typed [`FetchError`].

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use data::{
    CatalogEntry, CatalogRecord, CatalogResponse, Component, FetchOptions, FetchResult,
    PayloadIov, PayloadRequest,
};
pub use effects::{BoxStream, Fetcher, HttpClient, HttpResponse, locate_payload};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FetchError, Result};
