use thiserror::Error;

use crate::player::Action;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal action {action:?} for seat {seat} (legal: {legal:?})")]
    IllegalAction {
        seat: usize,
        action: Action,
        legal: Vec<Action>,
    },
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand still in progress")]
    HandInProgress,
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Deck exhausted: requested {requested}, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
}
