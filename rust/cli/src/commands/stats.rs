//! `stats`: aggregate a hand history file or a directory of them.
//!
//! Every record is checked for chip conservation (net results sum to zero and
//! no seat loses more than it started with). Any violation still prints the
//! summary but fails the command.

use std::io::Write;
use std::path::Path;

use hulhe_engine::logger::HandRecord;
use hulhe_engine::state::{EndReason, Winner};

use crate::error::CliError;
use crate::io_utils::{is_history_file, read_text_auto};
use crate::ui;

#[derive(Debug, Default)]
struct StatsState {
    hands: u64,
    wins: [u64; 2],
    ties: u64,
    folds: u64,
    showdowns: u64,
    net: [i64; 2],
    skipped: u64,
    corrupted: u64,
    violations: u64,
}

impl StatsState {
    fn consume(&mut self, content: &str, err: &mut dyn Write) -> Result<(), CliError> {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        for (i, line) in lines.iter().enumerate() {
            let rec: HandRecord = match serde_json::from_str(line) {
                Ok(r) => r,
                Err(_) => {
                    // a torn last line is a crash artifact, not corruption
                    if i == lines.len() - 1 && !has_trailing_nl {
                        self.skipped += 1;
                    } else {
                        self.corrupted += 1;
                    }
                    continue;
                }
            };
            self.check(&rec, err)?;
            self.add(&rec);
        }
        Ok(())
    }

    fn check(&mut self, rec: &HandRecord, err: &mut dyn Write) -> Result<(), CliError> {
        let net = rec.result.net;
        if net[0] + net[1] != 0 {
            self.violations += 1;
            ui::write_error(
                err,
                &format!("Chip conservation violated at hand {}", rec.hand_id),
            )?;
        }
        for seat in 0..2 {
            if net[seat] < -i64::from(rec.starting_stacks[seat]) {
                self.violations += 1;
                ui::write_error(
                    err,
                    &format!(
                        "Seat {seat} lost more than its stack at hand {}",
                        rec.hand_id
                    ),
                )?;
            }
        }
        Ok(())
    }

    fn add(&mut self, rec: &HandRecord) {
        self.hands += 1;
        match rec.result.winner {
            Winner::Seat(s) if s < 2 => self.wins[s] += 1,
            Winner::Seat(_) => self.corrupted += 1,
            Winner::Tie => self.ties += 1,
        }
        match rec.result.reason {
            EndReason::Fold => self.folds += 1,
            EndReason::Showdown => self.showdowns += 1,
        }
        self.net[0] += rec.result.net[0];
        self.net[1] += rec.result.net[1];
    }
}

pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(input);
    let mut state = StatsState::default();

    if path.is_dir() {
        let mut stack = vec![path.to_path_buf()];
        while let Some(d) = stack.pop() {
            let Ok(rd) = std::fs::read_dir(&d) else {
                continue;
            };
            for p in rd.filter_map(Result::ok).map(|e| e.path()) {
                if p.is_dir() {
                    stack.push(p);
                } else if is_history_file(&p) {
                    match read_text_auto(&p) {
                        Ok(content) => state.consume(&content, err)?,
                        Err(_) => state.corrupted += 1,
                    }
                }
            }
        }
    } else {
        let content = read_text_auto(path)
            .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", input, e)))?;
        state.consume(&content, err)?;
    }

    if state.corrupted > 0 {
        ui::display_warning(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }
    if state.skipped > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    if state.hands == 0 && (state.corrupted > 0 || state.skipped > 0) {
        return Err(CliError::InvalidInput("no valid records".to_string()));
    }

    let summary = serde_json::json!({
        "hands": state.hands,
        "wins": { "seat0": state.wins[0], "seat1": state.wins[1] },
        "ties": state.ties,
        "ended_by": { "fold": state.folds, "showdown": state.showdowns },
        "net": { "seat0": state.net[0], "seat1": state.net[1] },
    });
    let json_output = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_output)?;

    if state.violations > 0 {
        return Err(CliError::InvalidInput(format!(
            "Statistics validation failed: {} violation(s)",
            state.violations
        )));
    }
    Ok(())
}
