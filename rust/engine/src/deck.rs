use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Source of private and community cards for one table.
///
/// A dealer is owned by exactly one [`crate::engine::Engine`]; nothing about its
/// ordering is shared between tables.
pub trait Dealer {
    /// Restore all 52 cards and re-randomize their order.
    fn shuffle(&mut self);

    /// Remove and return the next `n` cards.
    ///
    /// # Errors
    ///
    /// [`GameError::DeckExhausted`] when fewer than `n` cards remain. Nothing is
    /// removed in that case.
    fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError>;

    fn remaining(&self) -> usize;
}

/// Uniformly shuffled 52-card deck driven by a seeded ChaCha20 stream.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }
}

impl Dealer for Deck {
    fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        draw_from(&self.cards, &mut self.position, n)
    }

    fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

/// Deals a fixed card sequence in order. `shuffle` rewinds to the first card.
///
/// Hole cards are drawn two per seat starting with seat 0, then the flop,
/// turn and river, so a sequence of nine cards fully determines a hand.
#[derive(Debug, Clone)]
pub struct StackedDeck {
    cards: Vec<Card>,
    position: usize,
}

impl StackedDeck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }
}

impl Dealer for StackedDeck {
    fn shuffle(&mut self) {
        self.position = 0;
    }

    fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        draw_from(&self.cards, &mut self.position, n)
    }

    fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

fn draw_from(cards: &[Card], position: &mut usize, n: usize) -> Result<Vec<Card>, GameError> {
    let remaining = cards.len().saturating_sub(*position);
    if remaining < n {
        return Err(GameError::DeckExhausted {
            requested: n,
            remaining,
        });
    }
    let out = cards[*position..*position + n].to_vec();
    *position += n;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_past_end_reports_exhaustion() {
        let mut deck = Deck::new_with_seed(3);
        deck.shuffle();
        assert_eq!(deck.draw(50).unwrap().len(), 50);
        let err = deck.draw(3).unwrap_err();
        assert_eq!(
            err,
            GameError::DeckExhausted {
                requested: 3,
                remaining: 2
            }
        );
        // failed draw leaves the deck untouched
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn stacked_deck_rewinds_on_shuffle() {
        let cards: Vec<Card> = ["As", "Kd", "7c"].iter().map(|s| s.parse().unwrap()).collect();
        let mut deck = StackedDeck::new(cards.clone());
        assert_eq!(deck.draw(2).unwrap(), cards[..2].to_vec());
        deck.shuffle();
        assert_eq!(deck.draw(3).unwrap(), cards);
    }
}
