//! Configuration management for the Pexels search tool.
//!
//! Handles loading and saving configuration from JSONC files.
//! Holds the API key and the default search parameters.

use crate::pexels::client::DEFAULT_BASE_URL;
use crate::pexels::models::DEFAULT_PER_PAGE;
use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pexels API key
    pub api_key: String,
    /// Default number of videos requested per search
    pub per_page: u32,
    /// Default minimum video duration in seconds
    pub min_duration: u64,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Pexels API base URL
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            per_page: DEFAULT_PER_PAGE,
            min_duration: 0,
            timeout_secs: 30,
            base_url: DEFAULT_BASE_URL.to_string(),
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
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/pexels-search/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| format!("Failed to deserialize config: {}", config_path.display()))
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path written to, or error
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(config_path)
    }

    /// Replace the API key when an override is given.
    ///
    /// Empty overrides are ignored so an unset environment variable does not
    /// wipe the key from the file.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
        self
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/pexels-search/config.jsonc`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join("pexels-search").join("config.jsonc"))
    }
}

/// Strip `//` comments from JSONC content.
///
/// A `//` preceded by an odd number of quotes on its line is inside a string
/// and kept. Escaped quotes are not handled.
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
        assert!(config.api_key.is_empty());
        assert_eq!(config.per_page, 10);
        assert_eq!(config.min_duration, 0);
        assert_eq!(config.base_url, "https://api.pexels.com");
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("absent.jsonc"))).unwrap();
        assert!(loaded.api_key.is_empty());
        assert_eq!(loaded.timeout_secs, 30);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.jsonc");

        let config = Config {
            api_key: "test_key".to_string(),
            min_duration: 15,
            ..Config::default()
        };

        let written = config.save(Some(&config_path)).unwrap();
        assert_eq!(written, config_path);
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.api_key, "test_key");
        assert_eq!(loaded.min_duration, 15);
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // Key from https://www.pexels.com/api/
            "api_key": "test_key",
            "per_page": 25 // more results
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.api_key, "test_key");
        assert_eq!(loaded.per_page, 25);
        assert_eq!(loaded.base_url, "https://api.pexels.com");
    }

    #[test]
    fn test_config_invalid_json_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");
        fs::write(&config_path, "{ not json").unwrap();
        assert!(Config::load(Some(&config_path)).is_err());
    }

    #[test]
    fn test_api_key_override() {
        let config = Config {
            api_key: "from_file".to_string(),
            ..Config::default()
        };
        let config = config.with_api_key(Some(String::new()));
        assert_eq!(config.api_key, "from_file");
        let config = config.with_api_key(None);
        assert_eq!(config.api_key, "from_file");
        let config = config.with_api_key(Some("from_env".to_string()));
        assert_eq!(config.api_key, "from_env");
    }
}
