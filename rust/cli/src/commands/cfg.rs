//! `cfg`: the resolved configuration as pretty JSON, each value paired with
//! the layer it came from.
//!
//! ```json
//! {
//!   "seed": { "value": null, "source": "default" },
//!   "total_stack": { "value": 400, "source": "env" },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "seed": { "value": config.seed, "source": sources.seed },
        "total_stack": { "value": config.total_stack, "source": sources.total_stack },
        "big_blind": { "value": config.big_blind, "source": sources.big_blind },
        "min_stack": { "value": config.min_stack, "source": sources.min_stack },
        "stack_mode": { "value": config.stack_mode, "source": sources.stack_mode },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
