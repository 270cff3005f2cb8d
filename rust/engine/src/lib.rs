//! # hulhe-engine: Heads-Up Limit Hold'em Round Engine
//!
//! A deterministic fixed-limit Texas Hold'em engine for two seats, built to
//! generate labelled hands for training and benchmarking decision agents.
//! The engine is a synchronous state machine: the caller starts a hand, asks
//! for the legal actions of the seat to act, and applies one action at a time.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - The [`deck::Dealer`] seam and a seeded ChaCha20 deck
//! - [`hand`] - Hand evaluation and the [`hand::HandRanker`] seam
//! - [`player`] - Seats and actions
//! - [`rules`] - Table limits, bet sizing and the legal action set
//! - [`pot`] - Pot ledger, overbet refunds and tie splitting
//! - [`game`] - Streets, per-street betting state and hand phases
//! - [`engine`] - Hand lifecycle and action application
//! - [`state`] - Snapshots, the action log and hand results
//! - [`logger`] - HandRecord serialization to JSONL
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use hulhe_engine::engine::Engine;
//! use hulhe_engine::rules::{StackMode, TableConfig};
//!
//! let mut engine = Engine::new(TableConfig::default(), 42).unwrap();
//! let mut state = engine.start_hand(StackMode::Even).unwrap();
//!
//! // Both seats take the first legal non-fold action until the hand ends.
//! while let Some(seat) = state.to_act {
//!     let legal = engine.legal_actions(seat);
//!     state = engine.apply_action(seat, legal[1]).unwrap();
//! }
//! let result = state.result.unwrap();
//! assert_eq!(result.net[0] + result.net[1], 0);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! The same seed always yields the same button, stacks and cards:
//!
//! ```rust
//! use hulhe_engine::deck::{Dealer, Deck};
//!
//! let mut a = Deck::new_with_seed(7);
//! let mut b = Deck::new_with_seed(7);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.draw(5).unwrap(), b.draw(5).unwrap());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
pub mod state;
