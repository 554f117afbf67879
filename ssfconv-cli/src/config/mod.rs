//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use ssfconv_core::{DEFAULT_PUNCTUATIONS_FILE, DEFAULT_SEPARATOR, DEFAULT_SYMBOLS_FILE};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Conversion configuration
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Batch configuration
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Conversion-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
    /// Separator between token and tag
    pub separator: String,

    /// Symbol membership list
    pub symbols_file: PathBuf,

    /// Punctuation membership list
    pub punctuations_file: PathBuf,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            symbols_file: PathBuf::from(DEFAULT_SYMBOLS_FILE),
            punctuations_file: PathBuf::from(DEFAULT_PUNCTUATIONS_FILE),
        }
    }
}

/// Directory-mode configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Continue past files that fail to convert
    pub keep_going: bool,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;

        if config.conversion.separator.is_empty() {
            return Err(CliError::ConfigError("separator must not be empty".to_string()).into());
        }

        Ok(config)
    }
}
