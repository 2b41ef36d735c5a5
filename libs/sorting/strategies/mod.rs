//! Strategies Module
//!
//! Interchangeable algorithms the context can be bound to.

pub mod reverse;
pub mod sort;
pub mod traits;

// Re-exports
pub use reverse::ReverseStrategy;
pub use sort::SortStrategy;
pub use traits::{Strategy, StrategyError, StrategyResult};

/// Available strategy types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    Sort,
    Reverse,
}

impl StrategyType {
    /// Parse strategy type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "sort" | "normal" | "normalsorting" => Some(Self::Sort),
            "reverse" | "reversesorting" => Some(Self::Reverse),
            _ => None,
        }
    }

    /// Parse strategy type, failing with [`StrategyError::UnknownStrategy`]
    pub fn parse(s: &str) -> StrategyResult<Self> {
        Self::from_str(s).ok_or_else(|| StrategyError::UnknownStrategy(s.to_string()))
    }

    /// Get the strategy name
    pub fn name(&self) -> &str {
        match self {
            Self::Sort => "sort",
            Self::Reverse => "reverse",
        }
    }

    /// List all available strategy names
    pub fn available() -> Vec<&'static str> {
        vec!["sort", "reverse"]
    }
}

/// Factory function to create strategies based on type
pub fn create_strategy(strategy_type: StrategyType) -> Box<dyn Strategy> {
    match strategy_type {
        StrategyType::Sort => Box::new(SortStrategy::new()),
        StrategyType::Reverse => Box::new(ReverseStrategy::new()),
    }
}
