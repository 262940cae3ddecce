//! Error types for xpload-config.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot find config file {file} in {searched:?}")]
    NotFound { file: String, searched: Vec<PathBuf> },

    #[error("invalid config file {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },

    #[error("config file {} lists no storage prefix", path.display())]
    NoStoragePrefix { path: PathBuf },
}
