//! Rule-based agent for benchmarking.
//!
//! Rates its holding on a 0-10 scale (a preflop chart before the flop, the
//! made-hand category after it) and maps that rating plus the price of a call
//! onto fold, check/call or raise. It is deterministic: the same observation
//! always yields the same action.

use hulhe_engine::cards::Card;
use hulhe_engine::hand::{Category, evaluate_hand};
use hulhe_engine::player::Action;
use hulhe_engine::state::Observation;

use crate::{Agent, preferred};

/// Heuristic agent.
///
/// **Preflop:** premium pairs and big suited aces raise, strong broadway hands
/// call, trash folds to a raise and checks when free.
///
/// **Postflop:** two pair or better bets and raises, one pair calls when the
/// price is right, air checks and folds.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineAgent;

impl BaselineAgent {
    pub fn new() -> Self {
        Self
    }

    /// Preflop chart on a 0-10 scale.
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let (r1, r2) = (hole[0].rank as u8, hole[1].rank as u8);
        let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;
        let bump = u8::from(suited);

        if high == low {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }
        match (high, low) {
            (14, 13) => 8 + 2 * bump,
            (14, 12) => 7 + bump,
            (14, 11) => 6 + bump,
            (14, 10) => 5 + bump,
            (14, _) => 4 + bump,
            (13, 12) => 6 + bump,
            (13, 11) => 5 + bump,
            (13, 10) | (12, 10) => 4 + bump,
            (12, 11) => 5 + bump,
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Made-hand rating once at least the flop is out.
    fn postflop_strength(hole: [Card; 2], board: &[Card]) -> u8 {
        let mut cards = Vec::with_capacity(7);
        cards.extend_from_slice(&hole);
        cards.extend_from_slice(board);
        let strength = evaluate_hand(&cards);
        let base = match strength.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush => 10,
        };
        // a queen-or-better top kicker nudges the rating up
        let kicker = u8::from(strength.kickers[0] >= 12);
        (base + kicker).min(10)
    }

    fn choose(strength: u8, to_call: u32, pot: u32, legal: &[Action]) -> Action {
        if to_call == 0 {
            return match strength {
                7..=10 => preferred(legal, &[Action::Raise, Action::Check]),
                _ => preferred(legal, &[Action::Check]),
            };
        }
        // pot odds as integer ratios: call when pot >= k * to_call
        let priced_in = |k: u32| pot >= k.saturating_mul(to_call);
        match strength {
            9..=10 => preferred(legal, &[Action::Raise, Action::Call]),
            7..=8 => preferred(legal, &[Action::Call]),
            5..=6 if priced_in(3) => preferred(legal, &[Action::Call]),
            3..=4 if priced_in(5) => preferred(legal, &[Action::Call]),
            _ => preferred(legal, &[Action::Fold]),
        }
    }
}

impl Agent for BaselineAgent {
    fn decide(&mut self, obs: &Observation, legal: &[Action]) -> Action {
        let board = &obs.table.board;
        let strength = if board.len() >= 3 {
            Self::postflop_strength(obs.hole_cards, board)
        } else {
            Self::preflop_strength(obs.hole_cards)
        };
        Self::choose(strength, obs.to_call(), obs.table.pot, legal)
    }

    fn name(&self) -> &str {
        "BaselineAgent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hulhe_engine::cards::{Rank, Suit};

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn premium_pairs_and_big_slick() {
        let aces = [c(Rank::Ace, Suit::Hearts), c(Rank::Ace, Suit::Spades)];
        assert_eq!(BaselineAgent::preflop_strength(aces), 10);
        let ak_suited = [c(Rank::Ace, Suit::Hearts), c(Rank::King, Suit::Hearts)];
        assert_eq!(BaselineAgent::preflop_strength(ak_suited), 10);
        let ak_offsuit = [c(Rank::Ace, Suit::Hearts), c(Rank::King, Suit::Spades)];
        assert_eq!(BaselineAgent::preflop_strength(ak_offsuit), 8);
    }

    #[test]
    fn weak_offsuit_and_suited_connectors() {
        let weak = [c(Rank::Seven, Suit::Hearts), c(Rank::Two, Suit::Spades)];
        assert!(BaselineAgent::preflop_strength(weak) <= 3);
        let connectors = [c(Rank::Nine, Suit::Hearts), c(Rank::Eight, Suit::Hearts)];
        assert_eq!(BaselineAgent::preflop_strength(connectors), 5);
    }

    #[test]
    fn trips_rate_above_one_pair() {
        let hole = [c(Rank::Ace, Suit::Hearts), c(Rank::Ace, Suit::Spades)];
        let trips_board = [
            c(Rank::Ace, Suit::Diamonds),
            c(Rank::Seven, Suit::Clubs),
            c(Rank::Two, Suit::Hearts),
        ];
        let pair_board = [
            c(Rank::King, Suit::Diamonds),
            c(Rank::Seven, Suit::Clubs),
            c(Rank::Two, Suit::Hearts),
        ];
        assert!(
            BaselineAgent::postflop_strength(hole, &trips_board)
                > BaselineAgent::postflop_strength(hole, &pair_board)
        );
    }

    #[test]
    fn free_check_with_air_and_fold_to_pressure() {
        let legal_free = [Action::Fold, Action::Check, Action::Raise];
        assert_eq!(BaselineAgent::choose(1, 0, 4, &legal_free), Action::Check);
        let legal_facing = [Action::Fold, Action::Call, Action::Raise];
        assert_eq!(BaselineAgent::choose(1, 4, 6, &legal_facing), Action::Fold);
        assert_eq!(BaselineAgent::choose(10, 4, 6, &legal_facing), Action::Raise);
    }

    #[test]
    fn medium_hand_calls_only_when_priced_in() {
        let legal = [Action::Fold, Action::Call];
        assert_eq!(BaselineAgent::choose(5, 2, 6, &legal), Action::Call);
        assert_eq!(BaselineAgent::choose(5, 4, 6, &legal), Action::Fold);
    }

    #[test]
    fn capped_street_falls_back_to_call() {
        let legal = [Action::Fold, Action::Call];
        assert_eq!(BaselineAgent::choose(10, 4, 20, &legal), Action::Call);
    }
}
