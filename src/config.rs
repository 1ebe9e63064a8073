use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::db::DEFAULT_CURRENCY;

pub const DEFAULT_DATA_FILE: &str = "data/expenses.json";
pub const DEFAULT_LOG_FILE: &str = "logs/tracker.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_file: PathBuf,
    pub default_currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// On-disk YAML representation. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
    default_currency: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        let defaults = Self::default();
        Ok(Self {
            data_file: file.data_file.unwrap_or(defaults.data_file),
            log_file: file.log_file.unwrap_or(defaults.log_file),
            default_currency: file
                .default_currency
                .unwrap_or(defaults.default_currency),
        })
    }

    /// Command line flags take precedence over the config file.
    pub fn with_overrides(mut self, data_file: Option<PathBuf>, log_file: Option<PathBuf>) -> Self {
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }
}
