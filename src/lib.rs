//! A single-player blackjack engine with a persistent chip balance.
//!
//! The crate provides a [`Round`] type that manages one round of play
//! (dealing, player actions, the dealer's fixed policy, and resolution
//! through an ordered rule table) and a [`Session`] that carries the chip
//! balance across rounds and across process runs. Terminal handling and
//! rendering live in the binary; the engine itself is synchronous, pure
//! where it can be, and deterministic when fed a stacked shoe.
//!
//! # Example
//!
//! ```
//! use twentyone::{Deck, Round, TableRules};
//!
//! let mut shoe = Deck::new();
//! shoe.fill();
//! // A real game shuffles the shoe; an unshuffled one is deterministic.
//! let round = Round::deal(shoe, 10, TableRules::default()).unwrap();
//! assert_eq!(round.player_hand().len(), 2);
//! assert_eq!(round.dealer_hand().len(), 2);
//! ```

pub mod bankroll;
pub mod card;
pub mod deck;
pub mod error;
pub mod outcome;
pub mod round;
pub mod rules;
pub mod score;

// Re-export main types
pub use bankroll::{ChipVault, Session};
pub use card::{Card, DECK_CAPACITY, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BankrollError, DeckError};
pub use outcome::{Outcome, Resolution, RuleId, Tally};
pub use round::{Round, RoundState, TurnFlow};
pub use rules::TableRules;
