//! Round outcomes and the ordered resolution rule table.

use crate::deck::Deck;
use crate::score;

/// The result of a completed round, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins the bet.
    Win,
    /// Player loses the bet.
    Loss,
    /// Push: no chips change hands.
    Push,
}

impl Outcome {
    /// Bankroll multiplier: +1 win, -1 loss, 0 push.
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            Self::Win => 1,
            Self::Loss => -1,
            Self::Push => 0,
        }
    }
}

/// Identifies which resolution rule decided a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleId {
    /// Both sides hold a blackjack.
    BothBlackjack,
    /// Only the player holds a blackjack.
    PlayerBlackjack,
    /// Only the dealer holds a blackjack.
    DealerBlackjack,
    /// The dealer busted.
    DealerBust,
    /// The player busted.
    PlayerBust,
    /// The player made a soft 21.
    PlayerSoftTwentyOne,
    /// The dealer made a soft 21.
    DealerSoftTwentyOne,
    /// The player made a hard 21.
    PlayerTwentyOne,
    /// The dealer made a hard 21.
    DealerTwentyOne,
    /// Plain point comparison.
    Showdown,
}

/// Point facts about both finished hands, extracted once for resolution.
#[derive(Debug, Clone, Copy)]
pub struct Tally {
    /// Player's soft-aware total.
    pub player_points: u32,
    /// Dealer's soft-aware total.
    pub dealer_points: u32,
    /// Whether the player's hand is soft.
    pub player_soft: bool,
    /// Whether the dealer's hand is soft.
    pub dealer_soft: bool,
    /// Whether the player holds a blackjack.
    pub player_blackjack: bool,
    /// Whether the dealer holds a blackjack.
    pub dealer_blackjack: bool,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl Tally {
    /// Evaluates both hands into a tally.
    #[must_use]
    pub fn of(player: &Deck, dealer: &Deck) -> Self {
        Self {
            player_points: score::points(player),
            dealer_points: score::points(dealer),
            player_soft: score::is_soft(player),
            dealer_soft: score::is_soft(dealer),
            player_blackjack: score::is_blackjack(player),
            dealer_blackjack: score::is_blackjack(dealer),
            player_bust: score::is_bust(player),
            dealer_bust: score::is_bust(dealer),
        }
    }
}

/// One resolution rule: an identifier for reporting, and a predicate that
/// either settles the round or defers to the next rule.
pub struct Rule {
    /// Which rule this is.
    pub id: RuleId,
    /// Returns the outcome when this rule decides the round.
    pub applies: fn(&Tally) -> Option<Outcome>,
}

/// The resolution rules, in precedence order.
///
/// Evaluated top to bottom; the first rule to return an outcome wins, and
/// the final showdown rule always decides. Blackjacks and busts rank above
/// the generic point comparison, so the order here is load-bearing.
///
/// The player-bust rule sits below dealer-bust even though a busted player
/// never reaches the dealer's turn; the ordering is kept explicit so the
/// precedence is a testable artifact rather than implicit control flow.
pub const RULES: &[Rule] = &[
    Rule {
        id: RuleId::BothBlackjack,
        applies: |t| (t.player_blackjack && t.dealer_blackjack).then_some(Outcome::Push),
    },
    Rule {
        id: RuleId::PlayerBlackjack,
        applies: |t| t.player_blackjack.then_some(Outcome::Win),
    },
    Rule {
        id: RuleId::DealerBlackjack,
        applies: |t| t.dealer_blackjack.then_some(Outcome::Loss),
    },
    Rule {
        id: RuleId::DealerBust,
        applies: |t| t.dealer_bust.then_some(Outcome::Win),
    },
    Rule {
        id: RuleId::PlayerBust,
        applies: |t| t.player_bust.then_some(Outcome::Loss),
    },
    Rule {
        id: RuleId::PlayerSoftTwentyOne,
        applies: |t| (t.player_points == 21 && t.player_soft).then_some(Outcome::Win),
    },
    Rule {
        id: RuleId::DealerSoftTwentyOne,
        applies: |t| (t.dealer_points == 21 && t.dealer_soft).then_some(Outcome::Loss),
    },
    Rule {
        id: RuleId::PlayerTwentyOne,
        applies: |t| (t.player_points == 21).then_some(Outcome::Win),
    },
    Rule {
        id: RuleId::DealerTwentyOne,
        applies: |t| (t.dealer_points == 21).then_some(Outcome::Loss),
    },
    Rule {
        id: RuleId::Showdown,
        applies: |t| {
            Some(match t.player_points.cmp(&t.dealer_points) {
                core::cmp::Ordering::Greater => Outcome::Win,
                core::cmp::Ordering::Less => Outcome::Loss,
                core::cmp::Ordering::Equal => Outcome::Push,
            })
        },
    },
];

/// A settled round: the outcome and the rule that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// The outcome from the player's perspective.
    pub outcome: Outcome,
    /// The rule that fired.
    pub rule: RuleId,
}

/// Resolves a finished round by walking [`RULES`] top to bottom.
#[must_use]
pub fn resolve(tally: &Tally) -> Resolution {
    for rule in RULES {
        if let Some(outcome) = (rule.applies)(tally) {
            return Resolution {
                outcome,
                rule: rule.id,
            };
        }
    }
    // The showdown rule always decides; this line is unreachable.
    Resolution {
        outcome: Outcome::Push,
        rule: RuleId::Showdown,
    }
}
