use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::resolved::ResolvedConfig;

/// Connection parameters read from one JSON profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbConfig {
    /// Canonical path of the file this profile was read from.
    #[serde(skip)]
    pub source: PathBuf,
    pub host: String,
    #[serde(deserialize_with = "text_or_number")]
    pub port: String,
    pub apiroot: String,
    #[serde(default, deserialize_with = "opt_text_or_number")]
    pub apiver: Option<String>,
    pub path: StoragePath,
    #[serde(default)]
    pub verbosity: u8,
}

/// One storage prefix or an ordered list of them; the first is primary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoragePath {
    Single(String),
    Many(Vec<String>),
}

impl StoragePath {
    pub fn prefixes(&self) -> Vec<String> {
        match self {
            StoragePath::Single(p) => vec![p.clone()],
            StoragePath::Many(ps) => ps.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<TextOrNumber> for String {
    fn from(v: TextOrNumber) -> Self {
        match v {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Int(n) => n.to_string(),
            TextOrNumber::Float(f) => f.to_string(),
        }
    }
}

fn text_or_number<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    TextOrNumber::deserialize(d).map(String::from)
}

fn opt_text_or_number<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<Option<String>, D::Error> {
    Option::<TextOrNumber>::deserialize(d).map(|v| v.map(String::from))
}

impl DbConfig {
    /// Base URL of the catalog REST API.
    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.apiroot)
    }

    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let prefixes = self.path.prefixes();
        let Some(root) = prefixes.first().cloned() else {
            return Err(ConfigError::NoStoragePrefix {
                path: self.source.clone(),
            });
        };

        Ok(ResolvedConfig {
            catalog_base_url: self.url(),
            storage_root: root,
            storage_prefixes: prefixes,
            verbosity: self.verbosity,
        })
    }

    /// The profile as JSON, including the `cfgf` source path.
    pub fn to_value(&self) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut value {
            map.insert(
                "cfgf".to_string(),
                Value::String(self.source.display().to_string()),
            );
        }
        value
    }

    /// Walks `path` into the profile. Numeric segments index arrays.
    ///
    /// Lookup stops at the first segment that does not match and returns
    /// whatever was reached so far, so an unknown field prints the
    /// enclosing value instead of failing.
    pub fn field<S: AsRef<str>>(&self, path: &[S]) -> Value {
        let mut current = self.to_value();
        for segment in path {
            let segment = segment.as_ref();
            let next = match segment.parse::<usize>() {
                Ok(i) => current.get(i).cloned(),
                Err(_) => current.get(segment).cloned(),
            };
            match next {
                Some(v) => current = v,
                None => break,
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DbConfig {
        DbConfig {
            source: PathBuf::from("/etc/xpload/test.json"),
            host: "localhost".into(),
            port: "8080".into(),
            apiroot: "/api/cdb_rest".into(),
            apiver: None,
            path: StoragePath::Many(vec!["/data".into(), "/mirror".into()]),
            verbosity: 1,
        }
    }

    #[test]
    fn url_joins_host_port_and_root() {
        assert_eq!(sample().url(), "http://localhost:8080/api/cdb_rest");
    }

    #[test]
    fn resolve_uses_first_prefix_as_root() {
        let resolved = sample().resolve().unwrap();
        assert_eq!(resolved.catalog_base_url, "http://localhost:8080/api/cdb_rest");
        assert_eq!(resolved.storage_root, "/data");
        assert_eq!(resolved.storage_prefixes, vec!["/data", "/mirror"]);
        assert_eq!(resolved.verbosity, 1);
    }

    #[test]
    fn resolve_rejects_empty_prefix_list() {
        let mut cfg = sample();
        cfg.path = StoragePath::Many(vec![]);
        assert!(matches!(
            cfg.resolve(),
            Err(ConfigError::NoStoragePrefix { .. })
        ));
    }

    #[test]
    fn field_walks_nested_values() {
        let cfg = sample();
        assert_eq!(cfg.field(&["host"]), Value::String("localhost".into()));
        assert_eq!(cfg.field(&["path", "1"]), Value::String("/mirror".into()));
        assert_eq!(
            cfg.field(&["cfgf"]),
            Value::String("/etc/xpload/test.json".into())
        );
    }

    #[test]
    fn field_falls_back_to_enclosing_value() {
        let cfg = sample();
        assert_eq!(cfg.field(&["nope"]), cfg.to_value());
        assert_eq!(cfg.field(&["path", "7"]), cfg.field(&["path"]));
    }

    #[test]
    fn port_accepts_numbers() {
        let cfg: DbConfig = serde_json::from_str(
            r#"{"host":"h","port":8080,"apiroot":"/r","apiver":2,"path":"/data"}"#,
        )
        .unwrap();
        assert_eq!(cfg.port, "8080");
        assert_eq!(cfg.apiver.as_deref(), Some("2"));
        assert_eq!(cfg.path, StoragePath::Single("/data".into()));
        assert_eq!(cfg.verbosity, 0);
    }
}
