//! `deal`: one hand's cards, straight from a seeded deck.
//!
//! Cards come off the deck in the same order the engine deals them (seat 0
//! hole cards, seat 1 hole cards, then the board), so the output matches the
//! first hand of a `sim` run with the same seed.

use std::io::Write;

use hulhe_engine::cards::format_cards;
use hulhe_engine::deck::{Dealer, Deck};
use hulhe_engine::hand::{HandRanker, StandardRanker, evaluate_hand};

use crate::config;
use crate::error::CliError;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = match seed {
        Some(s) => s,
        None => config::load()?.seed.unwrap_or_else(rand::random),
    };
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    let h0 = deck.draw(2)?;
    let h1 = deck.draw(2)?;
    let board = deck.draw(5)?;
    let holes = [[h0[0], h0[1]], [h1[0], h1[1]]];

    let ranker = StandardRanker;
    for (seat, hole) in holes.iter().enumerate() {
        let mut seven = hole.to_vec();
        seven.extend_from_slice(&board);
        writeln!(
            out,
            "Seat {seat}: {} ({:?})",
            format_cards(hole),
            evaluate_hand(&seven).category
        )?;
    }
    writeln!(out, "Board: {}", format_cards(&board))?;

    let s0 = ranker.evaluate(&holes[0], &board);
    let s1 = ranker.evaluate(&holes[1], &board);
    let winner = match s0.cmp(&s1) {
        std::cmp::Ordering::Less => "Seat 0".to_string(),
        std::cmp::Ordering::Greater => "Seat 1".to_string(),
        std::cmp::Ordering::Equal => "Tie".to_string(),
    };
    writeln!(out, "Winner: {winner}")?;
    Ok(())
}
