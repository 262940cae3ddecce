//! Connection profiles for the conditions catalog.
//!
//! A profile is a small JSON file naming the catalog host and the local
//! storage prefixes payload files live under. [`ProfileSource`] finds
//! and decodes profiles; [`ResolvedConfig`] is what the rest of xpload
//! consumes.

mod error;
mod profile;
mod resolved;
mod source;

pub use error::{ConfigError, Result};
pub use profile::{DbConfig, StoragePath};
pub use resolved::{HARNESS_PROFILE, ResolvedConfig};
pub use source::{DEFAULT_PROFILE, DEFAULT_SEARCH_PATHS, ProfileSource};
