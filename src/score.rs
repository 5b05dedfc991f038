//! Pure hand evaluation.
//!
//! All functions take a hand by reference and have no side effects; the turn
//! engine and the resolution rules are built entirely on top of them.

use crate::card::Rank;
use crate::deck::Deck;

/// Returns whether the hand holds at least one ace.
#[must_use]
pub fn has_ace(hand: &Deck) -> bool {
    hand.cards().iter().any(|card| card.rank == Rank::Ace)
}

/// Point total with every ace counted as 1.
#[must_use]
pub fn hard_points(hand: &Deck) -> u32 {
    hand.cards().iter().map(|card| card.rank.hard_value()).sum()
}

/// Returns whether the hand is soft: it holds an ace that can count as 11
/// without busting.
#[must_use]
pub fn is_soft(hand: &Deck) -> bool {
    has_ace(hand) && hard_points(hand) <= 11
}

/// Soft-aware point total.
///
/// The hard total, plus 10 when the hand is soft. The adjustment applies at
/// most once however many aces are held; only one ace can count as 11 at a
/// time.
#[must_use]
pub fn points(hand: &Deck) -> u32 {
    hard_points(hand) + if is_soft(hand) { 10 } else { 0 }
}

/// Returns whether the hand is a blackjack: exactly two cards totalling 21.
#[must_use]
pub fn is_blackjack(hand: &Deck) -> bool {
    hand.len() == 2 && points(hand) == 21
}

/// Returns whether the hand totals 21, regardless of card count.
#[must_use]
pub fn is_twenty_one(hand: &Deck) -> bool {
    points(hand) == 21
}

/// Returns whether the hand busted (over 21).
#[must_use]
pub fn is_bust(hand: &Deck) -> bool {
    points(hand) > 21
}
