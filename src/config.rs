//! Configuration file handling.
//!
//! This module provides loading and saving of qtctoys configuration
//! from a TOML file.
//!
//! # Configuration Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/qtctoys/config.toml`
//! - macOS: `~/Library/Application Support/qtctoys/config.toml`
//! - Windows: `%APPDATA%\qtctoys\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! executable = "/opt/qtcreator-13.0.1/bin/qtcreator"
//! search_paths = ["/opt/qtcreator/bin/qtcreator"]
//! version_flag = "-version"
//! default_format = "text"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::platform::config_dir;

/// Application configuration.
///
/// It can be loaded from a TOML file or created with default values.
///
/// # Example
///
/// ```no_run
/// use qtctoys::Config;
///
/// // Load from file (or use defaults if file doesn't exist)
/// let config = Config::load().unwrap();
///
/// println!("Version flag: {}", config.version_flag);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Qt Creator executable to use instead of searching for one.
    ///
    /// When set, no other location is probed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable: Option<PathBuf>,

    /// Extra locations to probe before the platform defaults.
    ///
    /// Default: empty
    pub search_paths: Vec<PathBuf>,

    /// Flag passed to Qt Creator to make it print its version and plugins.
    ///
    /// Default: "-version"
    pub version_flag: String,

    /// Default output format when no `--format` flag is provided.
    ///
    /// Valid values: "text", "table", "json"
    /// Default: "text"
    pub default_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executable: None,
            search_paths: Vec::new(),
            version_flag: "-version".to_string(),
            default_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parses configuration from TOML text; missing keys take defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Saves the configuration to the config file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    ///
    /// # Example
    ///
    /// ```
    /// use qtctoys::Config;
    ///
    /// let path = Config::config_path();
    /// assert!(path.ends_with("qtctoys/config.toml"));
    /// ```
    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Generates a string containing the default configuration.
    pub fn generate_default_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}
