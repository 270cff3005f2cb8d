//! # hulhe CLI library
//!
//! Drives the heads-up limit engine from the command line: simulating
//! matches between agents, dealing single hands, summarizing hand histories
//! and showing the resolved configuration.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["hulhe", "sim", "--hands", "100", "--output", "runs/first"];
//! let code = hulhe_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: Play N hands between two agents, writing JSONL, CSV and text logs
//! - `deal`: Deal one hand for inspection
//! - `stats`: Aggregate results from hand history files
//! - `cfg`: Display configuration values and their sources

use std::io::Write;

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{COMMANDS, Commands, HulheCli};
use commands::{
    SimOptions, handle_cfg_command, handle_deal_command, handle_sim_command, handle_stats_command,
};

pub use error::CliError;

/// Parses `args` and runs the chosen subcommand.
///
/// Returns the process exit code: [`exit_code::SUCCESS`],
/// [`exit_code::ERROR`] or [`exit_code::INTERRUPTED`].
///
/// ```
/// use std::io;
/// let args = vec!["hulhe", "deal", "--seed", "42"];
/// let code = hulhe_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HulheCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    let result = match cli.cmd {
        Commands::Sim {
            hands,
            seed,
            agents,
            stack_mode,
            output,
        } => handle_sim_command(
            SimOptions {
                hands,
                seed,
                agents,
                stack_mode,
                output,
            },
            out,
            err,
        ),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Stats { input } => handle_stats_command(&input, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            match e {
                CliError::Interrupted(_) => exit_code::INTERRUPTED,
                _ => exit_code::ERROR,
            }
        }
    }
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Usage: hulhe <command> [options]\n\nCommands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: hulhe --help");
    exit_code::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_command_parses() {
        let commands = [
            vec!["hulhe", "sim", "--hands", "1"],
            vec!["hulhe", "deal"],
            vec!["hulhe", "stats", "--input", "hands.jsonl"],
            vec!["hulhe", "cfg"],
        ];
        for args in commands {
            assert!(HulheCli::try_parse_from(&args).is_ok(), "{args:?}");
        }
        assert_eq!(COMMANDS.len(), 4);
    }

    #[test]
    fn sim_flags_parse_into_fields() {
        let cli = HulheCli::try_parse_from([
            "hulhe",
            "sim",
            "--hands",
            "5",
            "--agents",
            "aggressive,passive",
            "--stack-mode",
            "carry-over",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Sim {
                hands,
                agents,
                stack_mode,
                ..
            } => {
                assert_eq!(hands, 5);
                assert_eq!(agents, "aggressive,passive");
                assert_eq!(stack_mode, Some(config::StackModeSetting::CarryOver));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_command_exits_with_usage() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["hulhe", "play"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let msg = String::from_utf8(err).unwrap();
        assert!(msg.contains("Usage: hulhe"));
        assert!(msg.contains("  sim"));
    }

    #[test]
    fn help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert_eq!(run(["hulhe", "--help"], &mut out, &mut err), exit_code::SUCCESS);
        assert!(!out.is_empty());
        assert!(err.is_empty());
    }
}
