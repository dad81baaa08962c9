//! Configuration management for the shipment dashboard.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages the shipment data location, start-up tab, date display and log file.

use crate::filter::Tab;
use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory.
const APP_DIR: &str = "dpack-tui";

/// Application configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file with shipment records (relative to the config file or absolute).
    /// The built-in demo data is used when unset.
    pub shipments_path: Option<String>,
    /// Tab selected on start-up
    pub default_tab: Tab,
    /// Show dates in the local time zone instead of UTC
    pub local_time: bool,
    /// Log file path (relative to the config file or absolute)
    pub log_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shipments_path: None,
            default_tab: Tab::All,
            local_time: false,
            log_path: "dpack-tui.log".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| format!("Failed to deserialize config: {}", config_path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Details
    /// Returns `$XDG_CONFIG_HOME/dpack-tui/config.jsonc` or `~/.config/dpack-tui/config.jsonc`.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(app_config_dir()?.join("config.jsonc"))
    }

    /// Get the shipments file path, if one is configured.
    ///
    /// # Arguments
    /// * `config_path` - Config file this configuration was loaded from
    pub fn shipments_file_path(&self, config_path: &Path) -> Option<PathBuf> {
        self.shipments_path
            .as_deref()
            .map(|path| resolve_beside(config_path, path))
    }

    /// Get the log file path.
    ///
    /// # Arguments
    /// * `config_path` - Config file this configuration was loaded from
    pub fn log_file_path(&self, config_path: &Path) -> PathBuf {
        resolve_beside(config_path, &self.log_path)
    }
}

fn app_config_dir() -> Result<PathBuf> {
    let config_dir =
        config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
    Ok(config_dir.join(APP_DIR))
}

/// Absolute paths are kept; relative ones sit next to the config file.
fn resolve_beside(config_path: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match config_path.parent() {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}

/// Strip `//` line comments that are not inside a string.
///
/// Quote counting is simplified and does not handle escaped quotes.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| match line.find("//") {
            Some(pos) if line[..pos].matches('"').count() % 2 == 0 => line[..pos].trim_end(),
            _ => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.shipments_path.is_none());
        assert_eq!(config.default_tab, Tab::All);
        assert!(!config.local_time);
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("none.jsonc"))).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.jsonc");

        let config = Config {
            shipments_path: Some("/data/shipments.json".to_string()),
            default_tab: Tab::OutForDelivery,
            local_time: true,
            ..Config::default()
        };

        config.save(Some(&config_path)).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // Start on the in-transit tab
            "default_tab": "in-transit",
            "shipments_path": "https://example.invalid/a.json"
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.default_tab, Tab::InTransit);
        assert_eq!(
            loaded.shipments_path.as_deref(),
            Some("https://example.invalid/a.json")
        );
    }

    #[test]
    fn test_config_rejects_unknown_tab() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");
        fs::write(&config_path, r#"{ "default_tab": "shipped" }"#).unwrap();
        assert!(Config::load(Some(&config_path)).is_err());
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let config = Config {
            shipments_path: Some("/tmp/shipments.json".to_string()),
            log_path: "/tmp/dpack.log".to_string(),
            ..Config::default()
        };
        let config_path = Path::new("/etc/dpack-tui/config.jsonc");
        assert_eq!(
            config.shipments_file_path(config_path),
            Some(PathBuf::from("/tmp/shipments.json"))
        );
        assert_eq!(config.log_file_path(config_path), PathBuf::from("/tmp/dpack.log"));
    }

    #[test]
    fn test_relative_paths_follow_config_file() {
        let config = Config {
            shipments_path: Some("data/shipments.json".to_string()),
            ..Config::default()
        };
        let config_path = Path::new("/srv/dashboard/config.jsonc");
        assert_eq!(
            config.shipments_file_path(config_path),
            Some(PathBuf::from("/srv/dashboard/data/shipments.json"))
        );
        assert_eq!(
            config.log_file_path(config_path),
            PathBuf::from("/srv/dashboard/dpack-tui.log")
        );
    }

    #[test]
    fn test_no_shipments_path() {
        let config_path = Path::new("config.jsonc");
        assert_eq!(Config::default().shipments_file_path(config_path), None);
    }
}
