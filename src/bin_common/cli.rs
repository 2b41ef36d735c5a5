//! CLI utilities for binaries
//!
//! Handles configuration path resolution and environment variables
//! for all binary executables.

use std::path::PathBuf;

/// Type of configuration to load
#[derive(Debug, Clone)]
pub enum ConfigType {
    /// Demo configuration (strategy_demo.yaml)
    Demo,
    /// Custom path
    Custom(String),
}

impl ConfigType {
    /// Get the default path for this config type
    pub fn default_path(&self) -> &str {
        match self {
            ConfigType::Demo => "config/strategy_demo.yaml",
            ConfigType::Custom(path) => path,
        }
    }

    /// Get the environment variable name for this config type
    ///
    /// Custom paths are explicit and never looked up in the environment.
    pub fn env_var_name(&self) -> Option<&str> {
        match self {
            ConfigType::Demo => Some("STRATEGY_CONFIG_PATH"),
            ConfigType::Custom(_) => None,
        }
    }
}

/// Load configuration path from environment or use default
///
/// # Examples
/// ```
/// use strategy_demo::bin_common::{load_config_from_env, ConfigType};
///
/// let path = load_config_from_env(ConfigType::Demo);
/// ```
pub fn load_config_from_env(config_type: ConfigType) -> PathBuf {
    config_type
        .env_var_name()
        .and_then(|name| std::env::var(name).ok())
        .unwrap_or_else(|| config_type.default_path().to_string())
        .into()
}

/// Parse command line arguments for a binary
///
/// Returns a vector of arguments (excluding the program name)
pub fn parse_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}
