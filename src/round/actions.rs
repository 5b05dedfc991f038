use crate::deck::Deck;
use crate::error::ActionError;
use crate::score;

use super::{Round, RoundState, TurnFlow};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == RoundState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: hit (draw one card).
    ///
    /// A bust ends the round on the spot (the dealer's turn is skipped); a
    /// made 21 ends the player's turn and hands play to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&mut self) -> Result<TurnFlow, ActionError> {
        self.ensure_player_turn()?;
        self.draw_to_player()?;

        if score::is_bust(&self.player) {
            log::debug!("player busts at {}", score::hard_points(&self.player));
            self.state = RoundState::Finished;
            return Ok(TurnFlow::Done);
        }
        if score::is_twenty_one(&self.player) {
            self.state = RoundState::DealerTurn;
            return Ok(TurnFlow::Done);
        }
        Ok(TurnFlow::Continue)
    }

    /// Player action: stand (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<TurnFlow, ActionError> {
        self.ensure_player_turn()?;
        self.state = RoundState::DealerTurn;
        Ok(TurnFlow::Done)
    }

    /// Player action: double down.
    ///
    /// Allowed only on the opening two cards and only while the bet is at
    /// most half of `bankroll`. Doubles the bet, draws exactly one card, and
    /// ends the player's turn whatever the draw brings.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand has taken a
    /// hit, the table does not offer doubling, the bankroll is too small, or
    /// the shoe is empty.
    pub fn double_down(&mut self, bankroll: u32) -> Result<TurnFlow, ActionError> {
        self.ensure_player_turn()?;
        if !self.rules.double_down || self.player.len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        if self.bet > bankroll / 2 {
            return Err(ActionError::InsufficientChips);
        }

        // Draw before touching the bet: a failed draw must leave the round
        // exactly as it was.
        self.draw_to_player()?;
        self.bet *= 2;
        self.doubled = true;
        log::debug!("double down: bet now {}", self.bet);

        self.state = if score::is_bust(&self.player) {
            RoundState::Finished
        } else {
            RoundState::DealerTurn
        };
        Ok(TurnFlow::Done)
    }

    /// Moves one card from the shoe to the player's hand.
    pub(super) fn draw_to_player(&mut self) -> Result<(), ActionError> {
        Deck::transfer(&mut self.shoe, &mut self.player).map_err(|_| ActionError::ShoeExhausted)?;
        Ok(())
    }
}
