//! Hand ranking.
//!
//! [`evaluate_hand`] finds the best five-card category and tiebreak kickers of
//! up to seven cards. [`HandRanker`] is the seam the engine uses at showdown:
//! it maps two hole cards plus the board to a [`HandScore`] where lower is
//! better and equal scores tie.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

impl HandStrength {
    fn new(category: Category, kickers: [u8; 5]) -> Self {
        Self { category, kickers }
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Totally ordered showdown score. Lower is strictly better; equal scores tie.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandScore(pub u32);

// One slot above the largest packed strength (category 8, five kickers < 16).
const SCORE_CEILING: u32 = 9 << 20;

impl From<&HandStrength> for HandScore {
    fn from(s: &HandStrength) -> Self {
        let packed = s
            .kickers
            .iter()
            .fold(s.category as u32, |acc, &k| (acc << 4) | u32::from(k));
        HandScore(SCORE_CEILING - packed)
    }
}

/// Compares two finished hands.
///
/// Implementations must be pure: the same inputs always produce the same score.
pub trait HandRanker {
    fn evaluate(&self, hole: &[Card; 2], board: &[Card]) -> HandScore;
}

/// Category + kicker ranking over the best five of the available cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRanker;

impl HandRanker for StandardRanker {
    fn evaluate(&self, hole: &[Card; 2], board: &[Card]) -> HandScore {
        let mut cards = Vec::with_capacity(2 + board.len());
        cards.extend_from_slice(hole);
        cards.extend_from_slice(board);
        HandScore::from(&evaluate_hand(&cards))
    }
}

/// Evaluates up to seven cards. With fewer than five cards the missing
/// kicker slots are zero, so partial boards still order consistently.
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut rank_mask: u16 = 0;
    let mut suit_masks = [0u16; 4];
    let mut suit_counts = [0u8; 4];
    for &c in cards {
        let r = rank_val(c.rank);
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
        suit_masks[c.suit.index()] |= 1 << r;
        suit_counts[c.suit.index()] += 1;
    }

    let flush_suit = suit_counts.iter().position(|&n| n >= 5);

    if let Some(s) = flush_suit {
        if let Some(high) = straight_high_from_mask(suit_masks[s]) {
            return HandStrength::new(Category::StraightFlush, [high, 0, 0, 0, 0]);
        }
    }

    let (quads, trips, pairs, singles) = group_ranks(&rank_counts);

    if let Some(&q) = quads.first() {
        let kicker = highest_excluding(&rank_counts, &[q]);
        return HandStrength::new(Category::FourOfAKind, [q, kicker, 0, 0, 0]);
    }

    if let Some(&t) = trips.first() {
        // a second set of trips plays as the pair
        let pair = trips.get(1).copied().into_iter().chain(pairs.first().copied()).max();
        if let Some(p) = pair {
            return HandStrength::new(Category::FullHouse, [t, p, 0, 0, 0]);
        }
    }

    if let Some(s) = flush_suit {
        let mut k = [0u8; 5];
        let ranks = (2..=14u8).rev().filter(|&r| suit_masks[s] & (1 << r) != 0);
        for (slot, r) in k.iter_mut().zip(ranks) {
            *slot = r;
        }
        return HandStrength::new(Category::Flush, k);
    }

    if let Some(high) = straight_high_from_mask(rank_mask) {
        return HandStrength::new(Category::Straight, [high, 0, 0, 0, 0]);
    }

    if let Some(&t) = trips.first() {
        let mut k = [t, 0, 0, 0, 0];
        fill_kickers(&mut k[1..3], &rank_counts, &[t]);
        return HandStrength::new(Category::ThreeOfAKind, k);
    }

    if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        let mut k = [high, low, 0, 0, 0];
        fill_kickers(&mut k[2..3], &rank_counts, &[high, low]);
        return HandStrength::new(Category::TwoPair, k);
    }

    if let Some(&p) = pairs.first() {
        let mut k = [p, 0, 0, 0, 0];
        fill_kickers(&mut k[1..4], &rank_counts, &[p]);
        return HandStrength::new(Category::OnePair, k);
    }

    let mut k = [0u8; 5];
    for (slot, &r) in k.iter_mut().zip(singles.iter()) {
        *slot = r;
    }
    HandStrength::new(Category::HighCard, k)
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

fn rank_val(r: Rank) -> u8 {
    r as u8
}

/// Ranks grouped by multiplicity, each list ordered high -> low.
fn group_ranks(rank_counts: &[u8; 15]) -> (Vec<u8>, Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut quads = vec![];
    let mut trips = vec![];
    let mut pairs = vec![];
    let mut singles = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            4 => quads.push(r),
            3 => trips.push(r),
            2 => pairs.push(r),
            1 => singles.push(r),
            _ => {}
        }
    }
    (quads, trips, pairs, singles)
}

fn highest_excluding(rank_counts: &[u8; 15], used: &[u8]) -> u8 {
    (2..=14u8)
        .rev()
        .find(|r| rank_counts[*r as usize] > 0 && !used.contains(r))
        .unwrap_or(0)
}

fn fill_kickers(slots: &mut [u8], rank_counts: &[u8; 15], used: &[u8]) {
    let ranks = (2..=14u8)
        .rev()
        .filter(|r| rank_counts[*r as usize] > 0 && !used.contains(r));
    for (slot, r) in slots.iter_mut().zip(ranks) {
        *slot = r;
    }
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    let mut m = mask;
    // ace also plays low
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    (5..=14u8).rev().find(|&high| {
        let window = 0b11111u16 << (high - 4);
        (m & window) == window
    })
}
