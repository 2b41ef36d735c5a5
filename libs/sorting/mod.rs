//! Sorting strategies
//!
//! A context that delegates a fixed operation to whichever strategy is
//! currently bound, plus the interchangeable strategies themselves.

pub mod context;
pub mod infrastructure;
pub mod strategies;

// Re-export commonly used items
pub use context::{Context, DEFAULT_DATA};
pub use infrastructure::{init_tracing, ConfigError, DemoConfig};
pub use strategies::{
    create_strategy, ReverseStrategy, SortStrategy, Strategy, StrategyError, StrategyResult,
    StrategyType,
};
