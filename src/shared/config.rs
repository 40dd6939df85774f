//! Application Configuration
//!
//! Loaded from `<config_dir>/kestrel/config.toml`. Every section and key is
//! optional; missing values take their defaults and unknown keys are ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub launchers: LaunchersConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Core toggles and paths
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Track usage and rank favorites first
    pub enable_favorites: bool,
    /// Run launcher scanners (Heroic) in addition to desktop entries
    pub scan_game_launchers: bool,
    /// Page size for presentation; the core does not use it
    pub items_per_page: usize,
    /// Override of the favorites file location
    pub favorites_path: Option<PathBuf>,
    /// Additional desktop entry roots, searched last
    pub extra_search_paths: Vec<PathBuf>,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            enable_favorites: false,
            scan_game_launchers: true,
            items_per_page: 8,
            favorites_path: None,
            extra_search_paths: Vec::new(),
        }
    }
}

/// Per-launcher settings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchersConfig {
    #[serde(default)]
    pub heroic: HeroicConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroicConfig {
    pub enabled: bool,
    /// Override of `<config_dir>/heroic`
    pub config_dir: Option<PathBuf>,
}

impl Default for HeroicConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            config_dir: None,
        }
    }
}

/// Logging settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `kestrel=debug`
    pub level: String,
    /// Log file; stderr when absent
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Standard location of the configuration file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kestrel").join(CONFIG_FILE))
    }

    /// Load from the standard location, returning defaults if no file exists
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.application.items_per_page == 0 {
            return Err(ConfigError::Invalid("items_per_page must be at least 1".to_string()));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid("logging level must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
