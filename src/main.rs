//! Terminal blackjack: argument parsing, logging, and the session loop.

mod tui;

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twentyone::{
    ChipVault, Deck, Outcome, Resolution, Round, RoundState, RuleId, Session, TableRules,
};

use tui::{Command, RawGuard, Reveal};

/// Pause between dealer draws; purely presentational.
const DEAL_PACE: Duration = Duration::from_millis(700);

/// Single-player terminal blackjack with a persistent chip balance.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path of the chip record file.
    #[arg(long, default_value = "chips.bin")]
    chips: PathBuf,
    /// Fixed RNG seed (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,
    /// Write a debug log to twentyone.log.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.verbose {
        init_logging()?;
    }

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    log::info!("seeded rng with {seed}");

    let mut session = Session::resume(ChipVault::new(&args.chips))
        .with_context(|| format!("cannot open chip record {}", args.chips.display()))?;

    let rules = TableRules::default();
    let _raw = RawGuard::enable().context("cannot switch the terminal to raw mode")?;

    loop {
        let Some(bet) = tui::prompt_bet(session.bankroll())? else {
            break;
        };

        let mut shoe = Deck::new();
        shoe.fill();
        shoe.shuffle(&mut rng);
        let mut round = Round::deal(shoe, bet, rules).context("opening deal failed")?;

        if play_player_turn(&mut round, session.bankroll())? {
            // Quit mid-round: the unfinished bet is never settled.
            return Ok(());
        }

        if round.state() == RoundState::DealerTurn {
            play_dealer_turn(&mut round)?;
        }

        let resolution = round.resolve().context("round left unresolved")?;
        tui::render_table(round.player_hand(), round.dealer_hand(), Reveal::All)?;
        tui::say(banner(&resolution))?;

        let balance = session
            .settle(round.bet(), resolution.outcome)
            .context("cannot save the chip balance")?;
        tui::say(&format!("Chips: {balance}"))?;
        tui::say("Press any key to play again (q to quit)")?;
        if tui::wait_any_key()? {
            break;
        }
    }

    Ok(())
}

/// Runs the player's turn. Returns `true` when the player quits.
fn play_player_turn(round: &mut Round, bankroll: u32) -> anyhow::Result<bool> {
    while round.state() == RoundState::PlayerTurn {
        tui::render_table(round.player_hand(), round.dealer_hand(), Reveal::HoleHidden)?;

        let can_double = round.player_hand().len() == 2 && round.bet() <= bankroll / 2;
        if can_double {
            tui::say("h - hit; s - stand; d - double down; q - quit")?;
        } else {
            tui::say("h - hit; s - stand; q - quit")?;
        }

        match tui::read_command()? {
            Command::Hit => {
                if let Err(err) = round.hit() {
                    // An exhausted shoe forces a stand rather than killing
                    // the round.
                    log::warn!("hit unavailable: {err}");
                    let _ = round.stand();
                }
            }
            Command::Stand => {
                let _ = round.stand();
            }
            Command::Double => match round.double_down(bankroll) {
                Ok(_) => {}
                Err(err) => tui::say(&format!("({err})"))?,
            },
            Command::Quit => return Ok(true),
        }
    }
    Ok(false)
}

/// Runs the dealer's turn, pacing each draw for the reveal.
fn play_dealer_turn(round: &mut Round) -> anyhow::Result<()> {
    tui::render_table(round.player_hand(), round.dealer_hand(), Reveal::All)?;
    while round.dealer_step()?.is_some() {
        thread::sleep(DEAL_PACE);
        tui::render_table(round.player_hand(), round.dealer_hand(), Reveal::All)?;
    }
    Ok(())
}

/// Maps a resolution to the line announced at the table.
const fn banner(resolution: &Resolution) -> &'static str {
    match resolution.rule {
        RuleId::BothBlackjack => "Two blackjacks. Push!",
        RuleId::PlayerBlackjack => "Blackjack! You win!",
        RuleId::DealerBlackjack => "Dealer blackjack. You lose.",
        RuleId::DealerBust => "Dealer busted! You win!",
        RuleId::PlayerBust => "You busted!",
        RuleId::PlayerSoftTwentyOne => "Soft win!",
        RuleId::DealerSoftTwentyOne => "Dealer makes a soft 21. You lose.",
        RuleId::PlayerTwentyOne => "Twenty-one! You win!",
        RuleId::DealerTwentyOne => "Dealer makes 21. You lose.",
        RuleId::Showdown => match resolution.outcome {
            Outcome::Win => "You win!",
            Outcome::Loss => "Dealer wins!",
            Outcome::Push => "Tie!",
        },
    }
}

/// Routes debug logging to a file; the game's redraws own the terminal.
fn init_logging() -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = std::fs::File::create("twentyone.log").context("create log file")?;
    simplelog::WriteLogger::init(log::LevelFilter::Debug, config, file)
        .context("initialize logger")?;
    Ok(())
}
