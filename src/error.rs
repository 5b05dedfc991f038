//! Error types for game operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when moving cards between decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The source deck has no cards.
    #[error("source deck is empty")]
    EmptySource,
    /// The destination deck is at capacity.
    #[error("destination deck is full")]
    FullDestination,
}

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not valid in the current round state.
    #[error("action is not valid in the current round state")]
    InvalidState,
    /// Double down is only offered on the opening two cards.
    #[error("double down is only offered on the opening two cards")]
    CannotDouble,
    /// Doubling requires the bet to be at most half the bankroll.
    #[error("not enough chips to double the bet")]
    InsufficientChips,
    /// The shoe has no cards left to draw.
    #[error("the shoe has no cards left")]
    ShoeExhausted,
}

/// Errors that can occur reading or writing the chip record.
#[derive(Debug, Error)]
pub enum BankrollError {
    /// The record exists but could not be read.
    #[error("cannot read chip record at {path}")]
    Read {
        /// Path of the record file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The record could not be opened or written.
    ///
    /// Callers treat this as fatal; playing on without persistence would
    /// silently lose the balance.
    #[error("cannot write chip record at {path}")]
    Write {
        /// Path of the record file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}
