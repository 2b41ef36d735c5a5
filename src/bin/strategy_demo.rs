//! Strategy demo client
//!
//! Binds a context to the configured initial strategy, runs it, rebinds it
//! and runs it again. The report goes to stdout; logs go to stderr.

use anyhow::{Context as _, Result};
use std::io::{self, Write};
use strategy_demo::bin_common::{
    load_config_from_env, parse_args, BinaryRunner, ConfigType, RunConfig,
};
use strategy_demo::client::run_client;
use strategy_demo::sorting::{init_tracing, DemoConfig};
use tracing::{debug, info};

struct StrategyDemo {
    run_config: RunConfig,
    config: DemoConfig,
    results: Option<(Vec<String>, Vec<String>)>,
}

impl BinaryRunner for StrategyDemo {
    fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.results = Some(run_client(&self.config, &mut out)?);
        out.flush()?;
        Ok(())
    }

    fn config(&self) -> &RunConfig {
        &self.run_config
    }

    fn summary(&self) -> Option<String> {
        self.results.as_ref().map(|(first, second)| {
            format!(
                "{}: [{}] then {}: [{}]",
                self.config.initial_strategy,
                first.join(","),
                self.config.rebind_strategy,
                second.join(",")
            )
        })
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // An explicit path on the command line wins over the environment
    let config_type = match parse_args().into_iter().next() {
        Some(path) => ConfigType::Custom(path),
        None => ConfigType::Demo,
    };
    let config_path = load_config_from_env(config_type);

    let loaded = DemoConfig::load_optional(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let using_defaults = loaded.is_none();
    let config = loaded.unwrap_or_default();

    let run_config = RunConfig::new("strategy_demo").with_log_level(config.log_level.clone());
    init_tracing(&run_config.log_level);

    if using_defaults {
        info!("No config at {}, using defaults", config_path.display());
    }
    info!("Configuration loaded:");
    info!("  Initial strategy: {}", config.initial_strategy);
    info!("  Rebind strategy: {}", config.rebind_strategy);
    debug!("  Data: {:?}", config.data);

    let mut app = StrategyDemo {
        run_config,
        config,
        results: None,
    };
    app.execute()
}
