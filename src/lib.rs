//! Strategy Demo - Main Library
//!
//! Client side of the strategy demo: binds a context to one strategy,
//! runs it, rebinds it and runs it again.
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for binary executables (CLI, runner)
//! - **client**: The client scenario driven by the `strategy_demo` binary
//! - **sorting**: Strategies and context (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use strategy_demo::bin_common::{load_config_from_env, ConfigType};
//! use strategy_demo::client::run_client;
//! ```

// Re-export workspace libraries for convenience
pub use sorting;

pub mod client;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;
    pub mod runner;

    pub use cli::{load_config_from_env, parse_args, ConfigType};
    pub use runner::{BinaryRunner, RunConfig};
}
