//! # hulhe-ai: Agents for the heads-up limit engine
//!
//! Decision makers that plug into [`hulhe_engine::engine::Engine`] and the
//! feature encoder that turns finished hands into training rows.
//!
//! ## Core Components
//!
//! - [`Agent`] - Trait every decision maker implements
//! - [`simple`] - Random, always-raise and passive agents
//! - [`baseline`] - Hand-strength heuristic agent
//! - [`encoder`] - Fixed-width state vectors for training data
//! - [`create_agent`] - Factory by name
//! - [`play_hand`] - Drives one hand between two agents
//!
//! ## Quick Start
//!
//! ```rust
//! use hulhe_ai::{create_agent, play_hand};
//! use hulhe_engine::engine::Engine;
//! use hulhe_engine::rules::{StackMode, TableConfig};
//!
//! let mut engine = Engine::new(TableConfig::default(), 42).unwrap();
//! let mut agents = [
//!     create_agent("aggressive", 1).unwrap(),
//!     create_agent("passive", 2).unwrap(),
//! ];
//! let state = play_hand(&mut engine, StackMode::Even, &mut agents).unwrap();
//! assert!(state.complete);
//! ```

use hulhe_engine::deck::Dealer;
use hulhe_engine::engine::Engine;
use hulhe_engine::errors::GameError;
use hulhe_engine::hand::HandRanker;
use hulhe_engine::player::Action;
use hulhe_engine::rules::StackMode;
use hulhe_engine::state::{Observation, TableState};

pub mod baseline;
pub mod encoder;
pub mod simple;

/// A decision maker for one seat.
///
/// `decide` is only called with a non-empty `legal` list and must return one
/// of its members; anything else is rejected by the engine as an illegal
/// action.
///
/// # Example Implementation
///
/// ```rust
/// use hulhe_ai::Agent;
/// use hulhe_engine::player::Action;
/// use hulhe_engine::state::Observation;
///
/// struct AlwaysCall;
///
/// impl Agent for AlwaysCall {
///     fn decide(&mut self, _obs: &Observation, legal: &[Action]) -> Action {
///         if legal.contains(&Action::Call) { Action::Call } else { Action::Check }
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysCall"
///     }
/// }
/// ```
pub trait Agent: Send {
    fn decide(&mut self, obs: &Observation, legal: &[Action]) -> Action;

    fn name(&self) -> &str;
}

/// Names accepted by [`create_agent`].
pub const AGENT_NAMES: [&str; 4] = ["random", "aggressive", "passive", "baseline"];

/// Builds an agent by name. `seed` only matters for agents that randomize.
///
/// ```rust
/// use hulhe_ai::create_agent;
///
/// assert_eq!(create_agent("baseline", 0).unwrap().name(), "BaselineAgent");
/// assert!(create_agent("oracle", 0).is_none());
/// ```
pub fn create_agent(name: &str, seed: u64) -> Option<Box<dyn Agent>> {
    match name {
        "random" => Some(Box::new(simple::RandomAgent::new(seed))),
        "aggressive" => Some(Box::new(simple::AggressiveAgent)),
        "passive" => Some(Box::new(simple::PassiveAgent)),
        "baseline" => Some(Box::new(baseline::BaselineAgent::new())),
        _ => None,
    }
}

/// Starts a hand and lets `agents[seat]` act for each seat until it ends.
///
/// # Errors
///
/// Whatever the engine rejects: an invalid stack assignment from `mode`, an
/// agent returning an action outside its legal set, or an exhausted dealer.
pub fn play_hand<D: Dealer, R: HandRanker>(
    engine: &mut Engine<D, R>,
    mode: StackMode,
    agents: &mut [Box<dyn Agent>; 2],
) -> Result<TableState, GameError> {
    let mut state = engine.start_hand(mode)?;
    while let Some(seat) = state.to_act {
        let obs = engine
            .observation(seat)
            .ok_or(GameError::NoHandInProgress)?;
        let legal = engine.legal_actions(seat);
        let action = agents[seat].decide(&obs, &legal);
        state = engine.apply_action(seat, action)?;
    }
    Ok(state)
}

/// First of `prefs` that appears in `legal`, else the first legal action.
pub(crate) fn preferred(legal: &[Action], prefs: &[Action]) -> Action {
    prefs
        .iter()
        .copied()
        .find(|a| legal.contains(a))
        .or_else(|| legal.first().copied())
        .unwrap_or(Action::Fold)
}
