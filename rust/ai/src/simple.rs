//! Fixed-policy agents used as opponents and for data generation.

use hulhe_engine::player::Action;
use hulhe_engine::state::Observation;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::{Agent, preferred};

/// Picks uniformly among the legal actions with its own seeded RNG.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn decide(&mut self, _obs: &Observation, legal: &[Action]) -> Action {
        legal.choose(&mut self.rng).copied().unwrap_or(Action::Fold)
    }

    fn name(&self) -> &str {
        "RandomAgent"
    }
}

/// Raise whenever allowed, otherwise call, otherwise check.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressiveAgent;

impl Agent for AggressiveAgent {
    fn decide(&mut self, _obs: &Observation, legal: &[Action]) -> Action {
        preferred(legal, &[Action::Raise, Action::Call, Action::Check, Action::Fold])
    }

    fn name(&self) -> &str {
        "AggressiveAgent"
    }
}

/// Never raises: checks when free, calls otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveAgent;

impl Agent for PassiveAgent {
    fn decide(&mut self, _obs: &Observation, legal: &[Action]) -> Action {
        preferred(legal, &[Action::Check, Action::Call, Action::Fold])
    }

    fn name(&self) -> &str {
        "PassiveAgent"
    }
}
