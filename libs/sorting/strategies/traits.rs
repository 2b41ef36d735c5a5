//! Strategy trait definition
//!
//! Defines the contract that all sorting strategies must implement.

use crate::infrastructure::ConfigError;
use thiserror::Error;

/// Result type for strategy operations
pub type StrategyResult<T> = Result<T, StrategyError>;

/// Errors that can occur while selecting a strategy
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Trait that all sorting strategies must implement
///
/// The context only ever talks to this trait, so any implementation can be
/// bound to it and swapped at runtime.
pub trait Strategy: Send + Sync {
    /// Get the strategy name for logging and identification
    fn name(&self) -> &str;

    /// Get a human readable description of what this strategy does
    fn description(&self) -> &str;

    /// Transform the sequence and return the result
    fn do_algorithm(&self, data: Vec<String>) -> Vec<String>;
}
