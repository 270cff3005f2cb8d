use std::collections::HashSet;

use hulhe_engine::cards::Card;
use hulhe_engine::deck::{Dealer, Deck};
use hulhe_engine::errors::GameError;

#[test]
fn deck_reset_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.reset();
    let cards = deck.draw(52).expect("should have 52 cards");
    let set: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(set.len(), 52);
    assert_eq!(deck.remaining(), 0);
    assert!(matches!(deck.draw(1), Err(GameError::DeckExhausted { .. })));
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(
        d1.draw(10).unwrap(),
        d2.draw(10).unwrap(),
        "same seed must yield identical order"
    );
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        d1.draw(10).unwrap(),
        d2.draw(10).unwrap(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn reshuffle_restores_full_deck() {
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();
    deck.draw(9).unwrap();
    assert_eq!(deck.remaining(), 43);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
}
