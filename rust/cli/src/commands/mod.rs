//! One module per subcommand.
//!
//! Each exposes `handle_<name>_command`, takes its output streams as
//! `&mut dyn Write` and returns `Result<(), CliError>`; [`crate::run`] turns
//! the error into a message and an exit code.

mod cfg;
mod deal;
mod sim;
mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use sim::{SimOptions, handle_sim_command};
pub use stats::handle_stats_command;
