//! Fixed-limit betting rules: table limits, bet sizing and the legal action set.

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::{BettingRound, Street};
use crate::player::{Action, Seat};

/// One opening bet plus three raises per street.
pub const DEFAULT_RAISE_LIMIT: u8 = 3;

/// Table limits shared by every hand played at one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Chips split between the two seats when stacks are (re)distributed.
    pub total_stack: u32,
    pub big_blind: u32,
    /// Smallest stack either seat may receive from a randomized split.
    pub min_stack: u32,
    pub raise_limit: u8,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            total_stack: 400,
            big_blind: 2,
            min_stack: 10,
            raise_limit: DEFAULT_RAISE_LIMIT,
        }
    }
}

impl TableConfig {
    pub fn small_blind(&self) -> u32 {
        self.big_blind / 2
    }

    pub fn small_bet(&self) -> u32 {
        self.big_blind
    }

    pub fn big_bet(&self) -> u32 {
        2 * self.big_blind
    }

    /// Raise increment for a street: the small bet up to and including the
    /// flop, the big bet on turn and river.
    pub fn bet_size(&self, street: Street) -> u32 {
        match street {
            Street::Preflop | Street::Flop => self.small_bet(),
            Street::Turn | Street::River => self.big_bet(),
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.big_blind < 2 {
            return Err(GameError::InvalidConfiguration(
                "big_blind must be >= 2 so the small blind is positive".into(),
            ));
        }
        if self.min_stack == 0 {
            return Err(GameError::InvalidConfiguration(
                "min_stack must be > 0".into(),
            ));
        }
        if self.total_stack < 2 * self.min_stack {
            return Err(GameError::InvalidConfiguration(format!(
                "total_stack {} cannot give both seats min_stack {}",
                self.total_stack, self.min_stack
            )));
        }
        Ok(())
    }
}

/// How stacks are assigned when a hand starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackMode {
    /// Uniform split of `total_stack`, each seat at least `min_stack`.
    Randomized,
    /// `total_stack / 2` each.
    Even,
    /// Keep the stacks left by the previous hand.
    CarryOver,
    /// Explicit stacks for seat 0 and seat 1.
    Fixed([u32; 2]),
}

/// Chips `actor` must add to match everything the opponent has committed.
///
/// This is measured against the opponent's actual commitment rather than the
/// table bet, so a short all-in raise that did not move the table bet can
/// still be called.
pub fn amount_to_call(actor: &Seat, opponent: &Seat, round: &BettingRound) -> u32 {
    round
        .current_bet()
        .max(opponent.current_bet())
        .saturating_sub(actor.current_bet())
}

/// The legal set for `actor`, in the fixed order fold, check|call, raise.
pub fn legal_actions(
    actor: &Seat,
    opponent: &Seat,
    round: &BettingRound,
    raise_limit: u8,
) -> Vec<Action> {
    let to_call = amount_to_call(actor, opponent, round);
    let mut actions = vec![Action::Fold];
    if to_call > 0 {
        actions.push(Action::Call);
    } else {
        actions.push(Action::Check);
    }
    let short_all_in_opponent =
        opponent.is_all_in() && opponent.current_bet() < round.current_bet();
    if round.raises() < raise_limit
        && !round.is_capped()
        && !short_all_in_opponent
        && actor.stack() > to_call
    {
        actions.push(Action::Raise);
    }
    actions
}

/// Rejects an action outside the legal set without coercing it.
pub fn validate_action(seat: usize, legal: &[Action], action: Action) -> Result<Action, GameError> {
    if legal.contains(&action) {
        Ok(action)
    } else {
        Err(GameError::IllegalAction {
            seat,
            action,
            legal: legal.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat_with_bet(stack: u32, bet: u32) -> Seat {
        let mut s = Seat::new(stack);
        s.commit(bet);
        s
    }

    #[test]
    fn blind_structure_derives_from_big_blind() {
        let cfg = TableConfig {
            big_blind: 10,
            ..TableConfig::default()
        };
        assert_eq!(cfg.small_blind(), 5);
        assert_eq!(cfg.bet_size(Street::Flop), 10);
        assert_eq!(cfg.bet_size(Street::Turn), 20);
    }

    #[test]
    fn rejects_non_positive_small_blind() {
        let cfg = TableConfig {
            big_blind: 1,
            ..TableConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn facing_bet_offers_call_not_check() {
        let sb = seat_with_bet(100, 1);
        let bb = seat_with_bet(100, 2);
        let round = BettingRound::new(2, 1);
        assert_eq!(
            legal_actions(&sb, &bb, &round, 3),
            vec![Action::Fold, Action::Call, Action::Raise]
        );
        assert_eq!(
            legal_actions(&bb, &sb, &round, 3),
            vec![Action::Fold, Action::Check, Action::Raise]
        );
    }

    #[test]
    fn no_raise_once_limit_reached() {
        let a = seat_with_bet(100, 2);
        let b = seat_with_bet(100, 2);
        let mut round = BettingRound::new(2, 1);
        for i in 0..3 {
            round.complete_raise(i % 2, 2);
        }
        assert!(!legal_actions(&a, &b, &round, 3).contains(&Action::Raise));
    }

    #[test]
    fn no_raise_without_chips_beyond_call() {
        let actor = seat_with_bet(3, 1);
        let opp = seat_with_bet(100, 4);
        let round = BettingRound::new(4, 1);
        assert_eq!(
            legal_actions(&actor, &opp, &round, 3),
            vec![Action::Fold, Action::Call]
        );
    }

    #[test]
    fn short_all_in_caller_cannot_be_reraised() {
        let opp = seat_with_bet(3, 3);
        let actor = seat_with_bet(100, 4);
        let round = BettingRound::new(4, 1);
        assert!(!legal_actions(&actor, &opp, &round, 3).contains(&Action::Raise));
    }

    #[test]
    fn short_all_in_raise_is_callable() {
        let shover = seat_with_bet(3, 3);
        let actor = seat_with_bet(100, 2);
        let mut round = BettingRound::new(2, 1);
        round.incomplete_raise(0);
        assert_eq!(amount_to_call(&actor, &shover, &round), 1);
        assert_eq!(
            legal_actions(&actor, &shover, &round, 3),
            vec![Action::Fold, Action::Call]
        );
    }

    #[test]
    fn validate_rejects_outside_set() {
        let legal = [Action::Fold, Action::Check];
        let err = validate_action(1, &legal, Action::Call).unwrap_err();
        assert!(matches!(err, GameError::IllegalAction { seat: 1, .. }));
    }
}
