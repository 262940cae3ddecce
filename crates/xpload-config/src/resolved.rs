use std::env;

use crate::error::Result;
use crate::source::ProfileSource;

/// Profile used by the verification harness when `XPLOAD_CONFIG_NAME` is unset.
pub const HARNESS_PROFILE: &str = "test";

/// The read-only view of a profile that fetching and verification need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub catalog_base_url: String,
    /// Primary storage prefix; fetched payload paths are anchored here.
    pub storage_root: String,
    /// All storage prefixes in lookup order, `storage_root` first.
    pub storage_prefixes: Vec<String>,
    pub verbosity: u8,
}

impl ResolvedConfig {
    pub fn new(catalog_base_url: impl Into<String>, storage_root: impl Into<String>) -> Self {
        let storage_root = storage_root.into();
        Self {
            catalog_base_url: catalog_base_url.into(),
            storage_prefixes: vec![storage_root.clone()],
            storage_root,
            verbosity: 0,
        }
    }

    pub fn verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Loads the profile named by `XPLOAD_CONFIG_NAME` (default [`HARNESS_PROFILE`]).
    pub fn from_env() -> Result<Self> {
        let name = env::var("XPLOAD_CONFIG_NAME").unwrap_or_else(|_| HARNESS_PROFILE.to_string());
        ProfileSource::from_env().load(&name)?.resolve()
    }

    /// The path a payload named `fragment` resolves to under the primary prefix.
    pub fn payload_path(&self, fragment: &str) -> String {
        format!("{}/{}", self.storage_root, fragment)
    }
}
