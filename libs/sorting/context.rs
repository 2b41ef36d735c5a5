//! Strategy context
//!
//! Holds the currently bound strategy and delegates work to it without
//! knowing which concrete strategy is in use.

use crate::infrastructure::DemoConfig;
use crate::strategies::{create_strategy, Strategy, StrategyResult, StrategyType};
use std::io::{self, Write};
use tracing::debug;

/// Fixed input used by [`Context::do_something`]
pub const DEFAULT_DATA: [&str; 5] = ["a", "b", "c", "d", "e"];

const ANNOUNCEMENT: &str =
    "Context: Sorting data using a specific strategy (don't know which one will be used)";

/// Delegates sorting to whichever strategy is currently bound
pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    /// Create a context bound to an initial strategy
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        debug!(strategy = strategy.name(), "Context created");
        Self { strategy }
    }

    /// Create a context bound to the strategy of the given type
    pub fn from_type(strategy_type: StrategyType) -> Self {
        Self::new(create_strategy(strategy_type))
    }

    /// Create a context bound to the configured initial strategy
    pub fn from_config(config: &DemoConfig) -> StrategyResult<Self> {
        Ok(Self::from_type(config.initial_type()?))
    }

    /// Replace the bound strategy; takes effect for all subsequent calls
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        debug!(
            from = self.strategy.name(),
            to = strategy.name(),
            "Rebinding strategy"
        );
        self.strategy = strategy;
    }

    /// Currently bound strategy
    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Run the bound strategy on `data` without reporting
    pub fn transform(&self, data: Vec<String>) -> Vec<String> {
        self.strategy.do_algorithm(data)
    }

    /// Run the bound strategy on `data` and report the outcome to `out`
    pub fn do_something_with<W: Write>(
        &self,
        data: Vec<String>,
        out: &mut W,
    ) -> io::Result<Vec<String>> {
        writeln!(out, "{}", ANNOUNCEMENT)?;
        let result = self.transform(data);
        writeln!(out, "{}", result.join(","))?;
        Ok(result)
    }

    /// Run the bound strategy on the fixed input and print the outcome
    ///
    /// Library entry point for the fixed [`DEFAULT_DATA`] run. The client
    /// binary feeds configured data through [`Context::do_something_with`]
    /// instead, which writes the same report.
    pub fn do_something(&self) -> io::Result<Vec<String>> {
        let data = DEFAULT_DATA.iter().map(|s| s.to_string()).collect();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.do_something_with(data, &mut out)
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
