//! Round state types.

/// Lifecycle of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Both turns are over; the round can be resolved.
    Finished,
}

/// What the player's turn does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnFlow {
    /// The hand is still live; prompt for another action.
    Continue,
    /// The player's turn is over.
    Done,
}
