//! Demo configuration
//!
//! Selects which strategies the client binds and the data fed to the context.

use crate::context::DEFAULT_DATA;
use crate::strategies::StrategyType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Strategy demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Strategy the context is constructed with
    #[serde(default = "default_initial_strategy")]
    pub initial_strategy: String,

    /// Strategy the context is rebound to
    #[serde(default = "default_rebind_strategy")]
    pub rebind_strategy: String,

    /// Input sequence handed to the context
    #[serde(default = "default_data")]
    pub data: Vec<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_initial_strategy() -> String {
    "sort".to_string()
}

fn default_rebind_strategy() -> String {
    "reverse".to_string()
}

fn default_data() -> Vec<String> {
    DEFAULT_DATA.iter().map(|s| s.to_string()).collect()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            initial_strategy: default_initial_strategy(),
            rebind_strategy: default_rebind_strategy(),
            data: default_data(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from YAML file
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        Self::from_yaml(&yaml_content)
    }

    /// Load configuration from YAML file, or `None` if the file does not exist
    pub fn load_optional(config_path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = config_path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Load configuration from YAML file, falling back to defaults if the
    /// file does not exist
    pub fn load_or_default(config_path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::load_optional(config_path)?.unwrap_or_default())
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: DemoConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Strategy type the context starts with
    pub fn initial_type(&self) -> Result<StrategyType> {
        parse_strategy("initial_strategy", &self.initial_strategy)
    }

    /// Strategy type the context is rebound to
    pub fn rebind_type(&self) -> Result<StrategyType> {
        parse_strategy("rebind_strategy", &self.rebind_strategy)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of: {}",
                valid_levels.join(", ")
            )));
        }

        self.initial_type()?;
        self.rebind_type()?;

        if self.data.is_empty() {
            return Err(ConfigError::ValidationError(
                "data must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_strategy(field: &str, value: &str) -> Result<StrategyType> {
    StrategyType::from_str(value).ok_or_else(|| {
        ConfigError::ValidationError(format!(
            "{} '{}' is not one of: {}",
            field,
            value,
            StrategyType::available().join(", ")
        ))
    })
}
