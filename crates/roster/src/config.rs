//! Storage configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

const DATA_PATH_VAR: &str = "ROSTER_DATA_PATH";
const PRETTY_JSON_VAR: &str = "ROSTER_PRETTY_JSON";

/// Configuration for the file-backed repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the collection
    pub data_path: PathBuf,

    /// Whether to pretty-print the JSON file
    pub pretty: bool,
}

impl StorageConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_path = lookup(DATA_PATH_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let pretty = match lookup(PRETTY_JSON_VAR) {
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                var: PRETTY_JSON_VAR.to_string(),
                value,
            })?,
            None => defaults.pretty,
        };

        Ok(Self { data_path, pretty })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/students.json"),
            pretty: true,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorageConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StorageConfig::default());
    }

    #[test]
    fn test_reads_variables() {
        let config = StorageConfig::from_lookup(lookup_from(&[
            ("ROSTER_DATA_PATH", "/srv/roster/students.json"),
            ("ROSTER_PRETTY_JSON", "FALSE"),
        ]))
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("/srv/roster/students.json"));
        assert!(!config.pretty);
    }

    #[test]
    fn test_rejects_bad_bool() {
        let err = StorageConfig::from_lookup(lookup_from(&[("ROSTER_PRETTY_JSON", "maybe")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref var, ref value } if var == "ROSTER_PRETTY_JSON" && value == "maybe"
        ));
    }
}
