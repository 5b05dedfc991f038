use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::score;

use super::{Round, RoundState};

impl Round {
    /// Draws one dealer card if the dealer must still draw.
    ///
    /// The dealer draws while their soft-aware total is below the table's
    /// stand threshold, so at the default 17 they stand on soft 17 and
    /// higher. Returns the drawn card, or `None` once the dealer stands (at
    /// which point the round is finished). One card per call lets the caller
    /// pace the reveal.
    ///
    /// An exhausted shoe is treated as a forced stand, not an error; a
    /// 52-card shoe cannot actually run out in a single round of sane play.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if it is not the dealer's turn.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        if score::points(&self.dealer) >= self.rules.dealer_stand_min {
            self.state = RoundState::Finished;
            return Ok(None);
        }

        match Deck::transfer(&mut self.shoe, &mut self.dealer) {
            Ok(card) => {
                log::debug!(
                    "dealer draws {card}, total {}",
                    score::points(&self.dealer)
                );
                Ok(Some(card))
            }
            Err(err) => {
                log::warn!("dealer cannot draw ({err}); standing at current total");
                self.state = RoundState::Finished;
                Ok(None)
            }
        }
    }

    /// Runs the dealer's turn to completion, returning the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if it is not the dealer's turn.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        let mut drawn = Vec::new();
        while let Some(card) = self.dealer_step()? {
            drawn.push(card);
        }
        Ok(drawn)
    }
}
