//! `sim`: play a match between two agents and record every hand.
//!
//! With `--output DIR` three files are written:
//!
//! - `hands.jsonl`: one [`HandRecord`] per line
//! - `training_data.csv`: header `v0..v300,result`, then one row per seat per
//!   hand holding the encoded final state from that seat's perspective and its
//!   net chip result
//! - `gamelog.txt`: the same hands in human-readable form
//!
//! # Environment Variables
//!
//! - `HULHE_SIM_BREAK_AFTER`: stop after N hands as if interrupted (exit 130)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use hulhe_ai::encoder::{STATE_DIM, encode_state};
use hulhe_ai::{AGENT_NAMES, Agent, create_agent, play_hand};
use hulhe_engine::engine::Engine;
use hulhe_engine::logger::{HandLogger, HandRecord};
use hulhe_engine::rules::StackMode;
use hulhe_engine::state::TableState;

use crate::config::{self, StackModeSetting};
use crate::error::CliError;
use crate::formatters::write_hand_log;
use crate::ui;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub hands: u64,
    pub seed: Option<u64>,
    /// `"a,b"` or a single name used for both seats
    pub agents: String,
    pub stack_mode: Option<StackModeSetting>,
    pub output: Option<String>,
}

/// Output files of one run.
struct SimSinks {
    logger: HandLogger,
    csv: BufWriter<File>,
    gamelog: BufWriter<File>,
}

impl SimSinks {
    fn create(dir: &Path) -> Result<Self, CliError> {
        std::fs::create_dir_all(dir)?;
        let logger = HandLogger::create(dir.join("hands.jsonl"))?;
        let mut csv = BufWriter::new(File::create(dir.join("training_data.csv"))?);
        let header: Vec<String> = (0..STATE_DIM).map(|i| format!("v{i}")).collect();
        writeln!(csv, "{},result", header.join(","))?;
        let gamelog = BufWriter::new(File::create(dir.join("gamelog.txt"))?);
        Ok(Self {
            logger,
            csv,
            gamelog,
        })
    }

    fn record(
        &mut self,
        hand_no: u64,
        state: &TableState,
        seed: u64,
        meta: &serde_json::Value,
        total_stack: u32,
    ) -> Result<(), CliError> {
        let id = self.logger.next_id();
        let mut rec = HandRecord::from_state(id, Some(seed), state)
            .ok_or_else(|| CliError::Engine("hand ended without a result".into()))?;
        rec.meta = Some(meta.clone());
        self.logger.write(&rec)?;
        write_hand_log(&mut self.gamelog, hand_no, &rec)?;

        for seat in 0..2 {
            let row: Vec<String> = encode_state(state, seat, total_stack)
                .iter()
                .map(|x| x.to_string())
                .collect();
            writeln!(self.csv, "{},{}", row.join(","), rec.result.net[seat])?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), CliError> {
        self.logger.flush()?;
        self.csv.flush()?;
        self.gamelog.flush()?;
        Ok(())
    }
}

fn parse_agents(list: &str, seed: u64) -> Result<[Box<dyn Agent>; 2], CliError> {
    let names: Vec<&str> = list.split(',').map(str::trim).collect();
    let (a, b) = match names.as_slice() {
        [one] => (*one, *one),
        [a, b] => (*a, *b),
        _ => {
            return Err(CliError::InvalidInput(format!(
                "--agents takes one or two names, got '{list}'"
            )));
        }
    };
    let make = |name: &str, offset: u64| {
        create_agent(name, seed.wrapping_add(offset)).ok_or_else(|| {
            CliError::InvalidInput(format!(
                "unknown agent '{name}' (expected one of: {})",
                AGENT_NAMES.join(", ")
            ))
        })
    };
    Ok([make(a, 1)?, make(b, 2)?])
}

pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mode_setting = opts.stack_mode.unwrap_or(cfg.stack_mode);
    let mode = StackMode::from(mode_setting);
    let table = cfg.table();

    let mut agents = parse_agents(&opts.agents, seed)?;
    let mut engine = Engine::new(table, seed)?;
    let meta = serde_json::json!({
        "agents": [agents[0].name(), agents[1].name()],
        "stack_mode": mode_setting,
    });

    let output_dir = opts.output.as_ref().map(PathBuf::from);
    let mut sinks = match &output_dir {
        Some(dir) => Some(SimSinks::create(dir)?),
        None => {
            ui::display_warning(err, "no --output given; hands will not be recorded")?;
            None
        }
    };

    let break_after = std::env::var("HULHE_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    tracing::info!(hands = opts.hands, seed, agents = %opts.agents, mode = ?mode_setting, "simulation started");

    let mut played = 0u64;
    let mut interrupted = false;
    while played < opts.hands {
        if break_after.is_some_and(|n| played >= n) {
            interrupted = true;
            break;
        }
        if mode == StackMode::CarryOver
            && played > 0
            && engine.seats().iter().any(|s| s.stack() == 0)
        {
            writeln!(out, "Match over after {played} hands")?;
            break;
        }

        let state = play_hand(&mut engine, mode, &mut agents)?;
        played += 1;
        if let Some(s) = sinks.as_mut() {
            s.record(played, &state, seed, &meta, table.total_stack)?;
        }
    }

    if let Some(s) = sinks.as_mut() {
        s.flush()?;
    }
    tracing::info!(played, "simulation finished");

    if interrupted {
        writeln!(out, "Interrupted: saved {}/{}", played, opts.hands)?;
        return Err(CliError::Interrupted(format!(
            "stopped after {} of {} hands",
            played, opts.hands
        )));
    }

    writeln!(out, "Simulated: {} hands", played)?;
    if let Some(dir) = &output_dir {
        writeln!(out, "Output: {}", dir.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_name_seats_both_agents() {
        let agents = parse_agents("passive", 1).unwrap();
        assert_eq!(agents[0].name(), "PassiveAgent");
        assert_eq!(agents[1].name(), "PassiveAgent");
    }

    #[test]
    fn unknown_or_extra_agents_are_rejected() {
        assert!(matches!(parse_agents("random,oracle", 1), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_agents("a,b,c", 1), Err(CliError::InvalidInput(_))));
    }
}
