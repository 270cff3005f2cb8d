use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Seat role in heads-up play. The button posts the small blind and acts first
/// preflop; the other seat posts the big blind and acts first after the flop.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Position {
    Button,
    BigBlind,
}

/// A voluntary decision. Bet sizes are fixed by the street, so no action carries
/// an amount.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise,
}

/// Everything that can appear in the action log: the forced blind posts and
/// the voluntary actions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggedAction {
    SmallBlind,
    BigBlind,
    Fold,
    Check,
    Call,
    Raise,
}

impl From<Action> for LoggedAction {
    fn from(a: Action) -> Self {
        match a {
            Action::Fold => LoggedAction::Fold,
            Action::Check => LoggedAction::Check,
            Action::Call => LoggedAction::Call,
            Action::Raise => LoggedAction::Raise,
        }
    }
}

/// One of the two seats at the table.
///
/// Seats are owned by the engine and mutated only through it; callers see them
/// through read accessors and snapshots.
#[derive(Debug, Clone, Default)]
pub struct Seat {
    /// Chips behind
    stack: u32,
    /// Chips committed on the current street
    current_bet: u32,
    /// Stack at the moment the hand started (before blinds)
    hand_start_stack: u32,
    hole: Option<[Card; 2]>,
    all_in: bool,
}

impl Seat {
    pub fn new(stack: u32) -> Self {
        Self {
            stack,
            hand_start_stack: stack,
            ..Self::default()
        }
    }

    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn hand_start_stack(&self) -> u32 {
        self.hand_start_stack
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole
    }

    /// Chips this seat has put into the current pot.
    pub fn contributed(&self) -> u32 {
        self.hand_start_stack.saturating_sub(self.stack)
    }

    /// Net result relative to the start of the hand.
    pub fn net(&self) -> i64 {
        i64::from(self.stack) - i64::from(self.hand_start_stack)
    }

    pub(crate) fn begin_hand(&mut self, stack: u32, hole: [Card; 2]) {
        self.stack = stack;
        self.hand_start_stack = stack;
        self.current_bet = 0;
        self.hole = Some(hole);
        self.all_in = false;
    }

    /// Moves up to `amount` chips from the stack into the current bet and
    /// returns how many actually moved. Hitting zero marks the seat all-in.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let moved = amount.min(self.stack);
        self.stack -= moved;
        self.current_bet += moved;
        if self.stack == 0 {
            self.all_in = true;
        }
        moved
    }

    /// Returns an uncalled part of the current bet to the stack.
    pub(crate) fn refund(&mut self, amount: u32) {
        debug_assert!(amount <= self.current_bet, "refund exceeds current bet");
        self.current_bet -= amount;
        self.stack += amount;
        self.all_in = self.stack == 0;
    }

    pub(crate) fn clear_bet(&mut self) {
        self.current_bet = 0;
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack += amount;
    }
}
