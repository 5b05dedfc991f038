//! Engine integration tests.

use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twentyone::{
    ActionError, Card, ChipVault, DECK_CAPACITY, Deck, Outcome, Rank, Round, RoundState, RuleId,
    Session, Suit, TableRules, TurnFlow, outcome, score,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand(cards: &[Card]) -> Deck {
    Deck::from_cards(cards).expect("within capacity")
}

/// Builds a shoe that deals `draws` in order (draws come off the top).
fn rigged_shoe(draws: &[Card]) -> Deck {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    Deck::from_cards(&cards).expect("within capacity")
}

fn rigged_round(draws: &[Card], bet: u32) -> Round {
    Round::deal(rigged_shoe(draws), bet, TableRules::default()).expect("enough cards to deal")
}

#[test]
fn points_without_ace_match_hard_points() {
    let hand = hand(&[card(Rank::Ten, Suit::Spades), card(Rank::Nine, Suit::Hearts)]);
    assert_eq!(score::hard_points(&hand), 19);
    assert_eq!(score::points(&hand), 19);
    assert!(!score::is_soft(&hand));
    assert!(!score::has_ace(&hand));
}

#[test]
fn single_ace_soft_adjustment() {
    let soft = hand(&[card(Rank::Ace, Suit::Spades), card(Rank::Six, Suit::Hearts)]);
    assert_eq!(score::hard_points(&soft), 7);
    assert_eq!(score::points(&soft), 17);
    assert!(score::is_soft(&soft));

    // A ten-card hardens the ace back to 1.
    let hardened = hand(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
    ]);
    assert_eq!(score::hard_points(&hardened), 17);
    assert_eq!(score::points(&hardened), 17);
    assert!(!score::is_soft(&hardened));
}

#[test]
fn two_aces_adjust_only_once() {
    let pair = hand(&[card(Rank::Ace, Suit::Spades), card(Rank::Ace, Suit::Hearts)]);
    assert_eq!(score::hard_points(&pair), 2);
    assert_eq!(score::points(&pair), 12);
    assert!(score::is_soft(&pair));
}

#[test]
fn blackjack_requires_exactly_two_cards() {
    let natural = hand(&[card(Rank::Ace, Suit::Spades), card(Rank::King, Suit::Hearts)]);
    assert!(score::is_blackjack(&natural));
    assert!(score::is_twenty_one(&natural));

    let made = hand(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
    ]);
    assert!(score::is_twenty_one(&made));
    assert!(!score::is_blackjack(&made));
}

#[test]
fn shuffle_is_a_permutation() {
    let mut deck = Deck::new();
    deck.fill();
    let mut before: Vec<Card> = deck.cards().to_vec();

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_CAPACITY);
    let mut after: Vec<Card> = deck.cards().to_vec();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn transfer_conserves_cards() {
    let mut from = hand(&[card(Rank::Two, Suit::Spades), card(Rank::Three, Suit::Hearts)]);
    let mut to = Deck::new();

    let moved = Deck::transfer(&mut from, &mut to).unwrap();
    assert_eq!(moved, card(Rank::Three, Suit::Hearts));
    assert_eq!(from.len() + to.len(), 2);

    // Empty source fails without touching either side.
    let mut empty = Deck::new();
    let err = Deck::transfer(&mut empty, &mut to).unwrap_err();
    assert_eq!(err, twentyone::DeckError::EmptySource);
    assert_eq!(to.len(), 1);

    // Full destination fails without consuming the source.
    let mut full = Deck::new();
    full.fill();
    let err = Deck::transfer(&mut from, &mut full).unwrap_err();
    assert_eq!(err, twentyone::DeckError::FullDestination);
    assert_eq!(from.len(), 1);
    assert_eq!(full.len(), DECK_CAPACITY);
}

#[test]
fn dealer_stands_on_seventeen() {
    // Player 18, dealer 17 hard: the dealer draws nothing.
    let mut round = rigged_round(
        &[
            card(Rank::Nine, Suit::Hearts),  // player
            card(Rank::Nine, Suit::Spades),  // player
            card(Rank::Ten, Suit::Clubs),    // dealer
            card(Rank::Seven, Suit::Diamonds), // dealer
        ],
        10,
    );

    assert_eq!(round.stand().unwrap(), TurnFlow::Done);
    let drawn = round.dealer_play().unwrap();
    assert!(drawn.is_empty());
    assert_eq!(round.dealer_hand().len(), 2);

    let resolution = round.resolve().unwrap();
    assert_eq!(resolution.outcome, Outcome::Win);
    assert_eq!(resolution.rule, RuleId::Showdown);
}

#[test]
fn dealer_draws_up_to_seventeen() {
    // Dealer starts at 12 and must draw until reaching 17 or more.
    let mut round = rigged_round(
        &[
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Nine, Suit::Spades), // player
            card(Rank::Six, Suit::Clubs),   // dealer
            card(Rank::Six, Suit::Diamonds), // dealer
            card(Rank::Two, Suit::Hearts),  // dealer draw (14)
            card(Rank::Five, Suit::Clubs),  // dealer draw (19)
            card(Rank::King, Suit::Spades), // never drawn
        ],
        10,
    );

    round.stand().unwrap();
    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(score::points(round.dealer_hand()), 19);
    assert_eq!(round.state(), RoundState::Finished);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    // Ace + six reads soft 17; the dealer does not draw.
    let mut round = rigged_round(
        &[
            card(Rank::Ten, Suit::Hearts), // player
            card(Rank::Nine, Suit::Spades), // player
            card(Rank::Ace, Suit::Clubs),  // dealer
            card(Rank::Six, Suit::Diamonds), // dealer
            card(Rank::King, Suit::Spades), // never drawn
        ],
        10,
    );

    round.stand().unwrap();
    assert!(round.dealer_play().unwrap().is_empty());
    assert!(score::is_soft(round.dealer_hand()));
    assert_eq!(score::points(round.dealer_hand()), 17);
}

#[test]
fn hit_to_twenty_one_ends_player_turn() {
    let mut round = rigged_round(
        &[
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Five, Suit::Spades), // player
            card(Rank::Ten, Suit::Clubs),   // dealer
            card(Rank::Seven, Suit::Diamonds), // dealer
            card(Rank::Six, Suit::Hearts),  // player hit (21)
        ],
        10,
    );

    assert_eq!(round.hit().unwrap(), TurnFlow::Done);
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert!(score::is_twenty_one(round.player_hand()));
    assert!(!score::is_blackjack(round.player_hand()));
}

#[test]
fn bust_skips_the_dealer_turn() {
    let mut round = rigged_round(
        &[
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Nine, Suit::Spades), // player
            card(Rank::Ten, Suit::Clubs),   // dealer
            card(Rank::Seven, Suit::Diamonds), // dealer
            card(Rank::Five, Suit::Hearts), // player hit (24)
        ],
        10,
    );

    assert_eq!(round.hit().unwrap(), TurnFlow::Done);
    assert_eq!(round.state(), RoundState::Finished);
    assert_eq!(round.dealer_hand().len(), 2);

    let resolution = round.resolve().unwrap();
    assert_eq!(resolution.outcome, Outcome::Loss);
    assert_eq!(resolution.rule, RuleId::PlayerBust);
}

#[test]
fn double_down_doubles_once_draws_once_ends_turn() {
    let mut round = rigged_round(
        &[
            card(Rank::Five, Suit::Hearts), // player
            card(Rank::Six, Suit::Spades),  // player
            card(Rank::Ten, Suit::Clubs),   // dealer
            card(Rank::Seven, Suit::Diamonds), // dealer
            card(Rank::Two, Suit::Hearts),  // double draw
        ],
        10,
    );

    assert_eq!(round.double_down(100).unwrap(), TurnFlow::Done);
    assert_eq!(round.bet(), 20);
    assert!(round.was_doubled());
    assert_eq!(round.player_hand().len(), 3);
    assert_eq!(round.state(), RoundState::DealerTurn);

    // The turn is over; no further hits.
    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn double_down_rejected_after_a_hit_or_on_thin_bankroll() {
    let mut round = rigged_round(
        &[
            card(Rank::Five, Suit::Hearts),
            card(Rank::Six, Suit::Spades),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Seven, Suit::Diamonds),
            card(Rank::Two, Suit::Hearts),
        ],
        10,
    );

    // Bet 10 against bankroll 19: 10 > 19 / 2.
    assert_eq!(
        round.double_down(19).unwrap_err(),
        ActionError::InsufficientChips
    );
    assert_eq!(round.bet(), 10);

    round.hit().unwrap();
    assert_eq!(round.double_down(100).unwrap_err(), ActionError::CannotDouble);
}

#[test]
fn blackjack_resolves_without_a_dealer_turn() {
    let round = rigged_round(
        &[
            card(Rank::Ace, Suit::Hearts),  // player
            card(Rank::King, Suit::Spades), // player
            card(Rank::Nine, Suit::Clubs),  // dealer
            card(Rank::Seven, Suit::Diamonds), // dealer (16, not blackjack)
        ],
        10,
    );

    assert_eq!(round.state(), RoundState::Finished);
    assert_eq!(round.dealer_hand().len(), 2);

    let resolution = round.resolve().unwrap();
    assert_eq!(resolution.outcome, Outcome::Win);
    assert_eq!(resolution.rule, RuleId::PlayerBlackjack);
}

#[test]
fn equal_totals_push() {
    let mut round = rigged_round(
        &[
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Nine, Suit::Spades), // player
            card(Rank::Ten, Suit::Clubs),   // dealer
            card(Rank::Nine, Suit::Diamonds), // dealer
        ],
        10,
    );

    round.stand().unwrap();
    round.dealer_play().unwrap();

    let resolution = round.resolve().unwrap();
    assert_eq!(resolution.outcome, Outcome::Push);
    assert_eq!(resolution.rule, RuleId::Showdown);
}

#[test]
fn resolve_rejects_an_unfinished_round() {
    let round = rigged_round(
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Seven, Suit::Diamonds),
        ],
        10,
    );
    assert_eq!(round.resolve().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn hit_with_an_empty_shoe_is_recoverable() {
    // Exactly four cards: the shoe is empty after the deal.
    let mut round = rigged_round(
        &[
            card(Rank::Five, Suit::Hearts),
            card(Rank::Six, Suit::Spades),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Seven, Suit::Diamonds),
        ],
        10,
    );

    assert_eq!(round.shoe_remaining(), 0);
    assert_eq!(round.hit().unwrap_err(), ActionError::ShoeExhausted);
    assert_eq!(round.player_hand().len(), 2);
    assert_eq!(round.state(), RoundState::PlayerTurn);
}

#[test]
fn double_down_with_an_empty_shoe_mutates_nothing() {
    // Exactly four cards: the shoe is empty after the deal.
    let mut round = rigged_round(
        &[
            card(Rank::Five, Suit::Hearts),
            card(Rank::Six, Suit::Spades),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Seven, Suit::Diamonds),
        ],
        10,
    );

    assert_eq!(round.shoe_remaining(), 0);
    assert_eq!(round.double_down(100).unwrap_err(), ActionError::ShoeExhausted);

    // The failed draw left the round exactly as it was.
    assert_eq!(round.bet(), 10);
    assert!(!round.was_doubled());
    assert_eq!(round.player_hand().len(), 2);
    assert_eq!(round.state(), RoundState::PlayerTurn);

    // The player can still finish the hand at the original stake.
    assert_eq!(round.stand().unwrap(), TurnFlow::Done);
}

#[test]
fn dealer_with_an_empty_shoe_stands_in_place() {
    let mut round = rigged_round(
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Six, Suit::Clubs),
            card(Rank::Six, Suit::Diamonds),
        ],
        10,
    );

    round.stand().unwrap();
    assert!(round.dealer_play().unwrap().is_empty());
    assert_eq!(round.state(), RoundState::Finished);
    assert_eq!(score::points(round.dealer_hand()), 12);
}

#[test]
fn rule_table_fires_in_precedence_order() {
    let mut tally = outcome::Tally {
        player_points: 21,
        dealer_points: 21,
        player_soft: true,
        dealer_soft: true,
        player_blackjack: true,
        dealer_blackjack: true,
        player_bust: false,
        dealer_bust: false,
    };

    let resolution = outcome::resolve(&tally);
    assert_eq!(resolution.rule, RuleId::BothBlackjack);
    assert_eq!(resolution.outcome, Outcome::Push);

    tally.dealer_blackjack = false;
    assert_eq!(outcome::resolve(&tally).rule, RuleId::PlayerBlackjack);

    tally.player_blackjack = false;
    assert_eq!(outcome::resolve(&tally).rule, RuleId::PlayerSoftTwentyOne);

    tally.player_soft = false;
    assert_eq!(outcome::resolve(&tally).rule, RuleId::PlayerTwentyOne);

    tally.player_points = 20;
    tally.dealer_soft = false;
    assert_eq!(outcome::resolve(&tally).rule, RuleId::DealerTwentyOne);

    tally.dealer_points = 22;
    tally.dealer_bust = true;
    let resolution = outcome::resolve(&tally);
    assert_eq!(resolution.rule, RuleId::DealerBust);
    assert_eq!(resolution.outcome, Outcome::Win);
}

fn temp_record(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("twentyone-test-{}-{name}", std::process::id()));
    path
}

#[test]
fn absent_record_reads_as_zero() {
    let path = temp_record("absent");
    let _ = std::fs::remove_file(&path);

    let vault = ChipVault::new(&path);
    assert_eq!(vault.load().unwrap(), 0);
}

#[test]
fn record_round_trips() {
    let path = temp_record("roundtrip");
    let vault = ChipVault::new(&path);

    vault.save(1234).unwrap();
    assert_eq!(vault.load().unwrap(), 1234);
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 4);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn bankroll_settles_exactly_once_per_round() {
    let path = temp_record("settle");
    let vault = ChipVault::new(&path);
    vault.save(100).unwrap();

    let mut session = Session::resume(vault.clone()).unwrap();
    assert_eq!(session.bankroll(), 100);

    // +1 / -1 / 0 over three rounds at bet 10 lands back on 100.
    assert_eq!(Outcome::Win.sign(), 1);
    assert_eq!(Outcome::Loss.sign(), -1);
    assert_eq!(Outcome::Push.sign(), 0);

    assert_eq!(session.settle(10, Outcome::Win).unwrap(), 110);
    assert_eq!(session.settle(10, Outcome::Loss).unwrap(), 100);
    assert_eq!(session.settle(10, Outcome::Push).unwrap(), 100);

    // Each settlement was written through immediately.
    assert_eq!(vault.load().unwrap(), 100);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn losses_clamp_at_zero() {
    let path = temp_record("clamp");
    let _ = std::fs::remove_file(&path);

    let mut session = Session::resume(ChipVault::new(&path)).unwrap();
    assert_eq!(session.bankroll(), 0);
    assert_eq!(session.settle(25, Outcome::Loss).unwrap(), 0);

    let _ = std::fs::remove_file(&path);
}
