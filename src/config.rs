//! Configuration module for seqreduce.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `SEQREDUCE_` and use double
//! underscores to separate nested levels:
//! - `SEQREDUCE_REDUCER__MAX_COUNT=1000` sets `reducer.max_count`
//! - `SEQREDUCE_REDUCER__REVERSAL_LENGTH=5` sets `reducer.reversal_length`
//! - `SEQREDUCE_OUTPUT__FORMAT=json` sets `output.format`

use anyhow::Context;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::io::OutputFormat;

/// Directory holding the settings file, searched for from the current directory upwards.
pub const CONFIG_DIR: &str = ".seqreduce";
pub const CONFIG_FILE: &str = "settings.toml";
pub const ENV_PREFIX: &str = "SEQREDUCE_";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Input limits and fixed lengths
    #[serde(default)]
    pub reducer: ReducerConfig,

    /// Result rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Log levels
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReducerConfig {
    /// Upper bound on a declared count and on values read to end of input
    #[serde(default = "default_max_count")]
    pub max_count: usize,

    /// Number of integers the reverse operation expects
    #[serde(default = "default_reversal_length")]
    pub reversal_length: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    /// `text` prints the bare result line, `json` prints an envelope
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default level for all modules
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module overrides, e.g. `reducer = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_max_count() -> usize {
    1_000_000
}
fn default_reversal_length() -> usize {
    3
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            reducer: ReducerConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            max_count: default_max_count(),
            reversal_length: default_reversal_length(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources, discovering the settings file
    /// from the current directory upwards.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = std::env::current_dir()
            .ok()
            .and_then(|dir| Self::find_workspace_config(&dir))
            .unwrap_or_else(Self::default_config_path);

        Self::load_from(config_path)
    }

    /// Load configuration from a specific file. A missing file leaves the
    /// defaults and environment in place.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(path.as_ref()))
            // Double underscore (__) separates nested levels
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .map(|key| key.as_str().to_lowercase().replace("__", ".").into()),
            )
            .extract()
            .map_err(Box::new)
    }

    /// Find `.seqreduce/settings.toml` in `start` or any of its ancestors.
    pub fn find_workspace_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
    }

    pub fn default_config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let toml_string = toml::to_string_pretty(self).context("serializing settings")?;
        std::fs::write(path, toml_string).with_context(|| format!("writing {}", path.display()))?;

        Ok(())
    }

    /// Write a default settings file under `root`.
    pub fn init_config_file(root: &Path, force: bool) -> anyhow::Result<PathBuf> {
        let config_path = root.join(Self::default_config_path());

        if !force && config_path.exists() {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite",
                config_path.display()
            );
        }

        Settings::default().save(&config_path)?;
        crate::log_event!("config", "initialized", "{}", config_path.display());

        Ok(config_path)
    }
}
