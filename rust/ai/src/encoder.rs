//! Fixed-width state vectors for training data.
//!
//! Layout of the [`STATE_DIM`] floats, all in `[0, 1]` except the chip
//! features, which are divided by the table's total stack:
//!
//! | range     | content                                                     |
//! |-----------|-------------------------------------------------------------|
//! | 0..34     | own hole cards, 17 each (13 rank one-hot + 4 suit one-hot)  |
//! | 34..119   | board, 5 slots of 17, zero for undealt cards                |
//! | 119..121  | position: `[1, 0]` on the button, `[0, 1]` otherwise        |
//! | 121..301  | history: 4 streets x 5 actions x 9 features                 |
//!
//! Each history slot holds the snapshot taken right after the action (own
//! stack, opponent stack, pot), the acting seat one-hot and the action
//! one-hot (fold, check, call, raise). Blind posts and checks are encoded as
//! calls. Actions past the fifth on a street are dropped.

use hulhe_engine::cards::Card;
use hulhe_engine::player::LoggedAction;
use hulhe_engine::state::{Observation, TableState};

pub const CARD_DIM: usize = 17;
pub const ACTIONS_PER_STREET: usize = 5;
pub const ACTION_DIM: usize = 9;
pub const STATE_DIM: usize = 2 * CARD_DIM + 5 * CARD_DIM + 2 + 4 * ACTIONS_PER_STREET * ACTION_DIM;

const BOARD_OFFSET: usize = 2 * CARD_DIM;
const POSITION_OFFSET: usize = BOARD_OFFSET + 5 * CARD_DIM;
const HISTORY_OFFSET: usize = POSITION_OFFSET + 2;

/// Encodes `state` from `perspective`'s point of view.
///
/// Hole cards are only known once the hand is complete; before that the hole
/// slots stay zero. Use [`encode_observation`] for a mid-hand decision point.
pub fn encode_state(state: &TableState, perspective: usize, total_stack: u32) -> Vec<f32> {
    let hole = state.hole_cards.map(|h| h[perspective]);
    encode(state, hole, perspective, total_stack)
}

/// Encodes what the acting seat sees, including its own hole cards.
pub fn encode_observation(obs: &Observation, total_stack: u32) -> Vec<f32> {
    encode(&obs.table, Some(obs.hole_cards), obs.seat, total_stack)
}

fn encode(state: &TableState, hole: Option<[Card; 2]>, me: usize, total_stack: u32) -> Vec<f32> {
    let mut v = vec![0.0f32; STATE_DIM];

    if let Some(hole) = hole {
        for (i, card) in hole.iter().enumerate() {
            write_card(&mut v[i * CARD_DIM..(i + 1) * CARD_DIM], card);
        }
    }
    for (i, card) in state.board.iter().take(5).enumerate() {
        let at = BOARD_OFFSET + i * CARD_DIM;
        write_card(&mut v[at..at + CARD_DIM], card);
    }
    v[POSITION_OFFSET + usize::from(state.button != me)] = 1.0;

    let norm = total_stack.max(1) as f32;
    let mut per_street = [0usize; 4];
    for entry in &state.action_log {
        let street = entry.street.index();
        let step = per_street[street];
        if step >= ACTIONS_PER_STREET {
            continue;
        }
        per_street[street] += 1;

        let at = HISTORY_OFFSET + (street * ACTIONS_PER_STREET + step) * ACTION_DIM;
        let slot = &mut v[at..at + ACTION_DIM];
        let snap = &entry.after;
        slot[0] = snap.seats[me].stack as f32 / norm;
        slot[1] = snap.seats[1 - me].stack as f32 / norm;
        slot[2] = snap.pot as f32 / norm;
        slot[3 + entry.seat.min(1)] = 1.0;
        slot[5 + action_index(entry.action)] = 1.0;
    }
    v
}

fn write_card(slot: &mut [f32], card: &Card) {
    slot[card.rank.index()] = 1.0;
    slot[13 + card.suit.index()] = 1.0;
}

fn action_index(action: LoggedAction) -> usize {
    match action {
        LoggedAction::Fold => 0,
        LoggedAction::Raise => 3,
        LoggedAction::SmallBlind
        | LoggedAction::BigBlind
        | LoggedAction::Check
        | LoggedAction::Call => 2,
    }
}
