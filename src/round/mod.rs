//! The per-round context and orchestration.
//!
//! A [`Round`] owns the shoe, both hands, and the bet for a single round of
//! play. Building it from an explicit shoe keeps the engine deterministic
//! under test: feed it a stacked deck and assert on the resolution.

mod actions;
mod dealer;
pub mod state;

pub use state::{RoundState, TurnFlow};

use crate::deck::Deck;
use crate::error::ActionError;
use crate::outcome::{self, Resolution, Tally};
use crate::rules::TableRules;
use crate::score;

/// All state for one round of play.
#[derive(Debug, Clone)]
pub struct Round {
    /// Un-dealt cards.
    shoe: Deck,
    /// The player's hand.
    player: Deck,
    /// The dealer's hand; the second card is the hole card.
    dealer: Deck,
    /// Current bet, doubled in place by a double down.
    bet: u32,
    /// Whether the bet was doubled this round.
    doubled: bool,
    /// House rules in effect.
    rules: TableRules,
    /// Current state.
    state: RoundState,
}

impl Round {
    /// Deals the opening hands from `shoe` and enters the player's turn.
    ///
    /// Two cards go to the player, then two to the dealer. An opening
    /// blackjack ends the round immediately: the dealer's turn is skipped and
    /// the round resolves against the dealer's two dealt cards.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::ShoeExhausted`] if `shoe` holds fewer than four
    /// cards.
    pub fn deal(shoe: Deck, bet: u32, rules: TableRules) -> Result<Self, ActionError> {
        let mut round = Self {
            shoe,
            player: Deck::new(),
            dealer: Deck::new(),
            bet,
            doubled: false,
            rules,
            state: RoundState::PlayerTurn,
        };

        for _ in 0..2 {
            round.draw_to_player()?;
        }
        for _ in 0..2 {
            Deck::transfer(&mut round.shoe, &mut round.dealer)
                .map_err(|_| ActionError::ShoeExhausted)?;
        }

        if score::is_blackjack(&round.player) {
            round.state = RoundState::Finished;
        }

        log::debug!(
            "dealt round: player {} ({}), dealer {} up",
            score::points(&round.player),
            round.player.len(),
            round
                .dealer
                .cards()
                .first()
                .map_or_else(String::new, ToString::to_string),
        );

        Ok(round)
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Deck {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Deck {
        &self.dealer
    }

    /// Returns the current bet (doubled if a double down happened).
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Returns whether the bet was doubled this round.
    #[must_use]
    pub const fn was_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn shoe_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Resolves the finished round through the ordered rule table.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] while either turn is still in
    /// progress.
    pub fn resolve(&self) -> Result<Resolution, ActionError> {
        if self.state != RoundState::Finished {
            return Err(ActionError::InvalidState);
        }

        let tally = Tally::of(&self.player, &self.dealer);
        let resolution = outcome::resolve(&tally);
        log::info!(
            "round resolved by {:?}: {:?} (player {}, dealer {})",
            resolution.rule,
            resolution.outcome,
            tally.player_points,
            tally.dealer_points,
        );
        Ok(resolution)
    }
}
