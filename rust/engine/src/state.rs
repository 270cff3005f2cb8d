//! Read-only views of a table: per-step snapshots, the action log and the
//! final hand result. Everything here is plain data handed to callers; the
//! engine never reads it back.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{Phase, Street};
use crate::player::{LoggedAction, Seat};

/// Public part of a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub stack: u32,
    pub current_bet: u32,
}

impl From<&Seat> for SeatView {
    fn from(s: &Seat) -> Self {
        Self {
            stack: s.stack(),
            current_bet: s.current_bet(),
        }
    }
}

/// Chip and board state captured right after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seats: [SeatView; 2],
    pub pot: u32,
    pub board: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLogEntry {
    pub street: Street,
    pub seat: usize,
    pub action: LoggedAction,
    pub after: Snapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndReason {
    Fold,
    Showdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Seat(usize),
    Tie,
}

/// Outcome of one hand. Built once when the hand ends and never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub winner: Winner,
    pub pot: u32,
    pub reason: EndReason,
    /// Chip change per seat relative to the start of the hand; sums to zero.
    pub net: [i64; 2],
}

/// Everything a caller may see after a step.
///
/// Hole cards and the result are only present once the hand is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub board: Vec<Card>,
    pub pot: u32,
    /// Full table bet on the current street; a short blind post sits below it.
    #[serde(default)]
    pub current_bet: u32,
    pub button: usize,
    pub to_act: Option<usize>,
    pub street: Street,
    pub phase: Phase,
    pub seats: [SeatView; 2],
    pub action_log: Vec<ActionLogEntry>,
    pub complete: bool,
    pub result: Option<HandResult>,
    pub hole_cards: Option<[[Card; 2]; 2]>,
}

/// What an agent is allowed to know when it is asked to act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub seat: usize,
    pub hole_cards: [Card; 2],
    pub table: TableState,
}

impl Observation {
    pub fn me(&self) -> &SeatView {
        &self.table.seats[self.seat]
    }

    pub fn opponent(&self) -> &SeatView {
        &self.table.seats[1 - self.seat]
    }

    pub fn is_button(&self) -> bool {
        self.table.button == self.seat
    }

    /// Chips a call costs: up to the table bet or the opponent's commitment,
    /// whichever is larger.
    pub fn to_call(&self) -> u32 {
        self.table
            .current_bet
            .max(self.opponent().current_bet)
            .saturating_sub(self.me().current_bet)
    }
}
