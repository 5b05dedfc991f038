//! The bounded card sequence used as both the shoe and a hand.

use rand::Rng;

use crate::card::{Card, DECK_CAPACITY, Rank, Suit};
use crate::error::DeckError;

/// An ordered sequence of up to [`DECK_CAPACITY`] cards.
///
/// The same type backs the shoe and both hands. Cards are created only by
/// [`Deck::fill`] (one of each rank/suit pair) and afterwards only move
/// between decks via [`Deck::transfer`], so a round never holds a duplicate
/// card and the total across shoe and hands never exceeds 52.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Builds a deck holding `cards` in order, last card on top.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::FullDestination`] if `cards` holds more than
    /// [`DECK_CAPACITY`] cards.
    pub fn from_cards(cards: &[Card]) -> Result<Self, DeckError> {
        if cards.len() > DECK_CAPACITY {
            return Err(DeckError::FullDestination);
        }
        Ok(Self {
            cards: cards.to_vec(),
        })
    }

    /// Resets the deck to the 52 canonical rank/suit pairs in fixed order.
    pub fn fill(&mut self) {
        self.cards.clear();
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
    }

    /// Shuffles the current contents in place.
    ///
    /// Fisher-Yates backward pass: each position from the top down is swapped
    /// with a uniformly chosen position at or below it.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Moves the top card of `from` onto `to`.
    ///
    /// Neither deck is mutated on failure, so callers can treat a failed
    /// transfer as a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptySource`] if `from` has no cards, or
    /// [`DeckError::FullDestination`] if `to` is at capacity.
    pub fn transfer(from: &mut Self, to: &mut Self) -> Result<Card, DeckError> {
        if to.cards.len() >= DECK_CAPACITY {
            return Err(DeckError::FullDestination);
        }
        let Some(card) = from.cards.pop() else {
            return Err(DeckError::EmptySource);
        };
        to.cards.push(card);
        Ok(card)
    }

    /// Removes all cards without changing capacity.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in order, last card on top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
