use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::comparator::{DEFAULT_LEFT_LABEL, DEFAULT_RIGHT_LABEL};
use crate::types::KeyType;

/// Comparator defaults, usually loaded from a `[diff]` table in TOML.
///
/// ```toml
/// [diff]
/// left_label = "before"
/// right_label = "after"
/// key_type = "field"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffConfig {
    #[serde(default)]
    pub diff: DiffSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffSettings {
    #[serde(default = "default_left_label")]
    pub left_label: String,
    #[serde(default = "default_right_label")]
    pub right_label: String,
    #[serde(default)]
    pub key_type: KeyType,
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            left_label: default_left_label(),
            right_label: default_right_label(),
            key_type: KeyType::default(),
        }
    }
}

fn default_left_label() -> String {
    DEFAULT_LEFT_LABEL.to_string()
}

fn default_right_label() -> String {
    DEFAULT_RIGHT_LABEL.to_string()
}

impl DiffConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse diff configuration")
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize diff configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = DiffConfig::from_toml_str("").unwrap();
        assert_eq!(config, DiffConfig::default());
        assert_eq!(config.diff.left_label, "object1");
        assert_eq!(config.diff.right_label, "object2");
        assert_eq!(config.diff.key_type, KeyType::Column);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config = DiffConfig::from_toml_str("[diff]\nkey_type = \"studlyProperty\"\n").unwrap();
        assert_eq!(config.diff.key_type, KeyType::StudlyProperty);
        assert_eq!(config.diff.left_label, "object1");
    }

    #[test]
    fn unknown_key_type_is_rejected() {
        let err = DiffConfig::from_toml_str("[diff]\nkey_type = \"colname\"\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn loads_from_file_and_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[diff]\nleft_label = \"before\"\nright_label = \"after\"").unwrap();
        let config = DiffConfig::load(file.path()).unwrap();
        assert_eq!(config.diff.left_label, "before");
        assert_eq!(config.diff.right_label, "after");

        let reparsed = DiffConfig::from_toml_str(&config.to_toml_string().unwrap()).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DiffConfig::load("/nonexistent/recdiff.toml").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/recdiff.toml"));
    }
}
