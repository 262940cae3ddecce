use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::profile::DbConfig;

/// Directories searched when `XPLOAD_CONFIG_DIR` is not set.
pub const DEFAULT_SEARCH_PATHS: &[&str] = &[".", "config"];

/// Profile used when no name is given and `XPLOAD_CONFIG` is not set.
pub const DEFAULT_PROFILE: &str = "prod";

/// Where profile files are looked up.
///
/// Environment variables are captured once by [`ProfileSource::from_env`];
/// resolving a name never reads the environment again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSource {
    pub search_paths: Vec<PathBuf>,
    pub default_profile: String,
    /// Merge `XPLOAD_VERBOSITY` over the file's `verbosity`.
    pub env_overrides: bool,
}

impl Default for ProfileSource {
    fn default() -> Self {
        Self {
            search_paths: DEFAULT_SEARCH_PATHS.iter().map(PathBuf::from).collect(),
            default_profile: DEFAULT_PROFILE.to_string(),
            env_overrides: false,
        }
    }
}

impl ProfileSource {
    pub fn from_env() -> Self {
        let mut source = Self::default();

        if let Ok(dir) = env::var("XPLOAD_CONFIG_DIR") {
            let dir = dir.trim_end_matches('/');
            if !dir.is_empty() {
                source.search_paths = vec![PathBuf::from(dir)];
            }
        }
        if let Ok(name) = env::var("XPLOAD_CONFIG") {
            source.default_profile = name;
        }
        source.env_overrides = true;
        source
    }

    pub fn search_paths(mut self, paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn default_profile(mut self, name: impl Into<String>) -> Self {
        self.default_profile = name.into();
        self
    }

    /// Finds the file for profile `name`.
    ///
    /// A name that looks like a path (contains `.` or `/`) is used as is.
    pub fn locate(&self, name: &str) -> Result<PathBuf> {
        if name.contains('.') || name.contains('/') {
            let path = PathBuf::from(name);
            if path.is_file() {
                return Ok(path);
            }
            return Err(ConfigError::NotFound {
                file: name.to_string(),
                searched: vec![],
            });
        }

        let file = if name.is_empty() {
            format!("{}.json", self.default_profile)
        } else {
            format!("{name}.json")
        };

        self.search_paths
            .iter()
            .map(|dir| dir.join(&file))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| ConfigError::NotFound {
                file,
                searched: self.search_paths.clone(),
            })
    }

    pub fn load(&self, name: &str) -> Result<DbConfig> {
        let path = self.locate(name)?;
        debug!(path = %path.display(), "loading profile");
        self.load_file(&path)
    }

    fn load_file(&self, path: &Path) -> Result<DbConfig> {
        let mut figment = Figment::new().merge(Json::file(path));
        if self.env_overrides {
            figment = figment.merge(Env::prefixed("XPLOAD_").only(&["verbosity"]));
        }

        let mut cfg: DbConfig = figment.extract().map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        cfg.source = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::StoragePath;
    use figment::Jail;

    const PROFILE: &str = r#"{
        "host": "catalog.local",
        "port": "8080",
        "apiroot": "/api/cdb_rest",
        "apiver": "1",
        "path": "/data",
        "verbosity": 2
    }"#;

    #[test]
    fn loads_named_profile_from_search_path() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file("config/test.json", PROFILE)?;

            let cfg = ProfileSource::default()
                .load("test")
                .map_err(|e| e.to_string())?;
            assert_eq!(cfg.host, "catalog.local");
            assert_eq!(cfg.path, StoragePath::Single("/data".into()));
            assert_eq!(cfg.verbosity, 2);
            assert!(cfg.source.ends_with("config/test.json"));
            Ok(())
        });
    }

    #[test]
    fn first_search_path_wins() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file("test.json", PROFILE)?;
            jail.create_file(
                "config/test.json",
                &PROFILE.replace("catalog.local", "other.local"),
            )?;

            let cfg = ProfileSource::default()
                .load("test")
                .map_err(|e| e.to_string())?;
            assert_eq!(cfg.host, "catalog.local");
            Ok(())
        });
    }

    #[test]
    fn empty_name_uses_default_profile() {
        Jail::expect_with(|jail| {
            jail.create_file("prod.json", PROFILE)?;

            let cfg = ProfileSource::default()
                .load("")
                .map_err(|e| e.to_string())?;
            assert_eq!(cfg.port, "8080");
            Ok(())
        });
    }

    #[test]
    fn path_like_name_is_used_verbatim() {
        Jail::expect_with(|jail| {
            jail.create_dir("elsewhere")?;
            jail.create_file("elsewhere/custom.json", PROFILE)?;

            let cfg = ProfileSource::default()
                .load("elsewhere/custom.json")
                .map_err(|e| e.to_string())?;
            assert_eq!(cfg.apiroot, "/api/cdb_rest");
            Ok(())
        });
    }

    #[test]
    fn env_selects_dir_and_default_profile() {
        Jail::expect_with(|jail| {
            jail.create_dir("profiles")?;
            jail.create_file("profiles/dev.json", PROFILE)?;
            jail.set_env("XPLOAD_CONFIG_DIR", "profiles/");
            jail.set_env("XPLOAD_CONFIG", "dev");
            jail.set_env("XPLOAD_VERBOSITY", "0");

            let source = ProfileSource::from_env();
            assert_eq!(source.search_paths, vec![PathBuf::from("profiles")]);

            let cfg = source.load("").map_err(|e| e.to_string())?;
            assert_eq!(cfg.verbosity, 0);
            Ok(())
        });
    }

    #[test]
    fn missing_profile_reports_searched_paths() {
        Jail::expect_with(|_jail| {
            let err = ProfileSource::default().load("absent").unwrap_err();
            match err {
                ConfigError::NotFound { file, searched } => {
                    assert_eq!(file, "absent.json");
                    assert_eq!(searched.len(), 2);
                }
                other => panic!("unexpected error: {other}"),
            }
            Ok(())
        });
    }

    #[test]
    fn malformed_profile_is_invalid() {
        Jail::expect_with(|jail| {
            jail.create_file("broken.json", r#"{"host": "h"}"#)?;

            let err = ProfileSource::default().load("broken").unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { .. }));
            Ok(())
        });
    }
}
