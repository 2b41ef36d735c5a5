//! Client scenario
//!
//! The client picks a concrete strategy, hands it to the context, then
//! swaps it for another one at runtime.

use sorting::{create_strategy, Context, DemoConfig};
use std::io::Write;
use tracing::info;

/// Run the bind / execute / rebind / execute sequence, writing the report to `out`
///
/// Returns the results of both executions in order.
pub fn run_client<W: Write>(
    config: &DemoConfig,
    out: &mut W,
) -> anyhow::Result<(Vec<String>, Vec<String>)> {
    let mut context = Context::from_config(config)?;
    writeln!(
        out,
        "Client: Strategy is set to {}.",
        context.strategy().description()
    )?;
    let first = context.do_something_with(config.data.clone(), out)?;

    context.set_strategy(create_strategy(config.rebind_type()?));
    writeln!(
        out,
        "Client: Strategy is set to {}.",
        context.strategy().description()
    )?;
    let second = context.do_something_with(config.data.clone(), out)?;

    info!(
        initial = %config.initial_strategy,
        rebound = %config.rebind_strategy,
        "Client scenario complete"
    );
    Ok((first, second))
}
