use serde::{Deserialize, Serialize};

/// A betting street. Determined solely by the number of community cards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// No community cards
    Preflop,
    /// Three community cards
    Flop,
    /// Four community cards
    Turn,
    /// Five community cards
    River,
}

impl Street {
    pub fn from_board_len(n: usize) -> Option<Street> {
        match n {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }

    /// Cards dealt to reach the following street, `None` on the river.
    pub fn cards_for_next(self) -> Option<usize> {
        match self {
            Street::Preflop => Some(3),
            Street::Flop | Street::Turn => Some(1),
            Street::River => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 1,
            Street::Turn => 2,
            Street::River => 3,
        }
    }
}

/// Where a hand is in its lifecycle.
///
/// `AwaitingAction` is the only phase in which actions are accepted. The
/// remaining phases are passed through by the engine inside a single
/// `apply_action` call until it needs input again or the hand ends.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// A seat must act on the current street.
    AwaitingAction,
    /// Betting on the street is over; refunds and the next deal are pending.
    StreetClosing,
    /// At least one seat is all-in; the remaining board is dealt without betting.
    AllInRunout,
    /// Five board cards are out and the hands are compared.
    Showdown,
    /// The hand result is final.
    Complete,
}

/// Per-street betting bookkeeping. Replaced wholesale at every street.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingRound {
    /// Largest complete commitment on this street; raise targets build on it.
    current_bet: u32,
    raises: u8,
    last_raiser: usize,
    capped: bool,
    /// Seats that still owe a voluntary response on this street.
    owes_action: [bool; 2],
}

impl BettingRound {
    /// A fresh street where `last_raiser` holds the initiative: the big blind
    /// preflop, the non-button seat afterwards.
    pub fn new(current_bet: u32, last_raiser: usize) -> Self {
        Self {
            current_bet,
            raises: 0,
            last_raiser,
            capped: false,
            owes_action: [true, true],
        }
    }

    /// The preflop round once the blinds are posted. The big blind's post
    /// stands as its action, so a limp closes the street.
    pub fn after_blinds(big_blind: u32, big_blind_seat: usize) -> Self {
        let mut round = Self::new(big_blind, big_blind_seat);
        round.owes_action[big_blind_seat] = false;
        round
    }

    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn raises(&self) -> u8 {
        self.raises
    }
    pub fn last_raiser(&self) -> usize {
        self.last_raiser
    }
    pub fn is_capped(&self) -> bool {
        self.capped
    }
    pub fn owes_action(&self, seat: usize) -> bool {
        self.owes_action[seat]
    }

    pub(crate) fn mark_acted(&mut self, seat: usize) {
        self.owes_action[seat] = false;
    }

    pub(crate) fn complete_raise(&mut self, seat: usize, new_bet: u32) {
        self.current_bet = new_bet;
        self.raises += 1;
        self.last_raiser = seat;
        self.owes_action[seat] = false;
        self.owes_action[1 - seat] = true;
    }

    /// An all-in short of the raise target: the table bet stays put and no
    /// further raise is possible this street.
    pub(crate) fn incomplete_raise(&mut self, seat: usize) {
        self.capped = true;
        self.owes_action[seat] = false;
        self.owes_action[1 - seat] = true;
    }
}
