//! The single heads-up pot and its settlement helpers.

use serde::{Deserialize, Serialize};

use crate::player::Seat;

/// Aggregate chips in the middle. Heads-up play never needs side pots: the
/// only asymmetric case, an uncalled overbet against an all-in, is settled by
/// [`settle_overbet`] returning the excess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    total: u32,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub(crate) fn add(&mut self, amount: u32) {
        self.total += amount;
    }

    pub(crate) fn remove(&mut self, amount: u32) {
        debug_assert!(amount <= self.total, "pot underflow");
        self.total -= amount;
    }
}

/// Chips handed back to a seat whose street commitment exceeded the opponent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refund {
    pub seat: usize,
    pub amount: u32,
}

/// When either seat is all-in, returns the unmatched part of the larger street
/// commitment to its owner and takes it back out of the pot.
///
/// Returns `None` when nobody is all-in or the commitments are already equal.
pub fn settle_overbet(seats: &mut [Seat; 2], pot: &mut Pot) -> Option<Refund> {
    if !seats.iter().any(Seat::is_all_in) {
        return None;
    }
    let (b0, b1) = (seats[0].current_bet(), seats[1].current_bet());
    let (seat, amount) = match b0.cmp(&b1) {
        std::cmp::Ordering::Equal => return None,
        std::cmp::Ordering::Greater => (0, b0 - b1),
        std::cmp::Ordering::Less => (1, b1 - b0),
    };
    seats[seat].refund(amount);
    pot.remove(amount);
    Some(Refund { seat, amount })
}

/// Splits a tied pot. The odd chip, if any, goes to `odd_chip_seat`.
pub fn split_pot(total: u32, odd_chip_seat: usize) -> [u32; 2] {
    let half = total / 2;
    let mut shares = [half, half];
    shares[odd_chip_seat] += total % 2;
    shares
}
