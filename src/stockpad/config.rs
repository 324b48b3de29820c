//! # Configuration
//!
//! Stored as `stockpad.json` in the working directory. Every key is optional;
//! a missing file means all defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data-file` | `inventory.json` | Inventory file, relative to the working directory |
//! | `currency` | `₹` | Symbol printed before prices |
//! | `confirm-delete` | `true` | Ask before deleting records |

use crate::error::{Result, StockError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "stockpad.json";
const DEFAULT_DATA_FILE: &str = crate::store::fs_backend::DEFAULT_DATA_FILE;
const DEFAULT_CURRENCY: &str = "₹";

pub const KEYS: &[&str] = &["data-file", "currency", "confirm-delete"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            currency: default_currency(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match normalize_key(key).as_str() {
            "data-file" => Some(self.data_file.clone()),
            "currency" => Some(self.currency.clone()),
            "confirm-delete" => Some(self.confirm_delete.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match normalize_key(key).as_str() {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(StockError::Config("data-file cannot be empty".to_string()));
                }
                self.data_file = value.to_string();
            }
            "currency" => self.currency = value.to_string(),
            "confirm-delete" => {
                self.confirm_delete = parse_bool(value).ok_or_else(|| {
                    StockError::Config(format!(
                        "confirm-delete expects true or false, got '{}'",
                        value
                    ))
                })?;
            }
            _ => return Err(StockError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace('_', "-")
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StockConfig::default();
        assert_eq!(config.data_file, "inventory.json");
        assert_eq!(config.currency, "₹");
        assert!(config.confirm_delete);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = StockConfig::load(dir.path()).unwrap();
        assert_eq!(config, StockConfig::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"currency": "$"}"#).unwrap();

        let config = StockConfig::load(dir.path()).unwrap();
        assert_eq!(config.currency, "$");
        assert_eq!(config.data_file, "inventory.json");
        assert!(config.confirm_delete);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = StockConfig::default();
        config.set("currency", "€").unwrap();
        config.set("confirm_delete", "no").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = StockConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.currency, "€");
        assert!(!loaded.confirm_delete);
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = StockConfig::default();
        assert_eq!(config.get("data-file"), Some("inventory.json".to_string()));
        assert_eq!(config.get("confirm-delete"), Some("true".to_string()));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = StockConfig::default();
        assert!(config.set("confirm-delete", "maybe").is_err());
        assert!(config.set("data-file", "  ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, StockConfig::default());
    }
}
