//! Configuration types

use std::path::PathBuf;

use edgebinder_domain::constants::{ADAPTER_KEY, CONFIG_ROOT_KEY, DEFAULT_INSTANCE};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_MAX_FILES};

/// Application configuration
///
/// `edgebinder` is kept untyped: adapters read their own keys from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// The `edgebinder` section, one table per instance (or the legacy flat form)
    pub edgebinder: Value,
}

impl AppConfig {
    /// The configuration tree served by the container's `config` service
    pub fn to_config_tree(&self) -> Value {
        let mut tree = Map::new();
        tree.insert(CONFIG_ROOT_KEY.to_string(), self.edgebinder.clone());
        Value::Object(tree)
    }

    /// Names of the configured instances, in key order
    ///
    /// The legacy flat form reports a single `default` instance.
    pub fn instance_names(&self) -> Vec<String> {
        let Value::Object(section) = &self.edgebinder else {
            return Vec::new();
        };
        let mut names: Vec<String> = section
            .iter()
            .filter(|(_, value)| value.is_object())
            .map(|(name, _)| name.clone())
            .collect();
        if section.contains_key(ADAPTER_KEY)
            && !names.iter().any(|name| name == DEFAULT_INSTANCE)
        {
            names.push(DEFAULT_INSTANCE.to_string());
        }
        names.sort();
        names
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            edgebinder: Value::Object(Map::new()),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,

    /// Maximum number of rotated files to keep
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
            max_files: LOG_MAX_FILES,
        }
    }
}
