//! Infrastructure shared by binaries: configuration and logging

pub mod config;
mod logging;

pub use config::{ConfigError, DemoConfig};
pub use logging::init_tracing;
