//! Command-line surface of the `hulhe` binary.

use clap::{Parser, Subcommand};

use crate::config::StackModeSetting;

#[derive(Debug, Parser)]
#[command(
    name = "hulhe",
    version,
    about = "Heads-up limit hold'em simulator and training-data generator"
)]
pub struct HulheCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play many hands between two agents and record them
    Sim {
        #[arg(long)]
        hands: u64,
        /// Table seed; falls back to HULHE_SEED, then a random seed
        #[arg(long)]
        seed: Option<u64>,
        /// Two comma-separated agent names, seat 0 first
        #[arg(long, default_value = "random,random")]
        agents: String,
        #[arg(long, value_enum)]
        stack_mode: Option<StackModeSetting>,
        /// Directory for hands.jsonl, training_data.csv and gamelog.txt
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal one hand and show both holdings and the full board
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Summarize a hand history file or directory
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}

/// Subcommand names, for the usage hint printed on parse errors.
pub const COMMANDS: &[&str] = &["sim", "deal", "stats", "cfg"];
