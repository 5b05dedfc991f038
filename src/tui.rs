//! Terminal collaborators: raw mode, key reads, the bet prompt, rendering.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

use twentyone::{Card, Deck, Suit, score};

/// Scoped raw-mode switch.
///
/// Raw mode is enabled on construction and the prior terminal mode is
/// restored on drop, on every exit path including errors.
pub struct RawGuard;

impl RawGuard {
    /// Switches the terminal to raw (unbuffered, unechoed) mode.
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// A single-key player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Draw one card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet for one final card.
    Double,
    /// Leave the table immediately.
    Quit,
}

/// Blocks for one recognized command key; unrecognized keys are ignored.
pub fn read_command() -> io::Result<Command> {
    loop {
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(Command::Quit);
            }
            match code {
                KeyCode::Char('h') => return Ok(Command::Hit),
                KeyCode::Char('s') => return Ok(Command::Stand),
                KeyCode::Char('d') => return Ok(Command::Double),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Command::Quit),
                _ => {}
            }
        }
    }
}

/// Drains any buffered keystrokes, then blocks for a single key press.
///
/// Returns `true` when the key asks to quit. Used for the "press any key"
/// pause between rounds, where stale keystrokes from the previous turn must
/// not fall through.
pub fn wait_any_key() -> io::Result<bool> {
    while event::poll(Duration::ZERO)? {
        let _ = event::read()?;
    }
    loop {
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            let ctrl_c = code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL);
            return Ok(ctrl_c || matches!(code, KeyCode::Char('q') | KeyCode::Esc));
        }
    }
}

/// Prompts for the round's bet, re-enabling canonical input for one
/// line-edited read. Returns `None` when the player quits (`q` or EOF).
pub fn prompt_bet(bankroll: u32) -> io::Result<Option<u32>> {
    terminal::disable_raw_mode()?;
    let bet = read_bet_line(bankroll);
    terminal::enable_raw_mode()?;
    bet
}

fn read_bet_line(bankroll: u32) -> io::Result<Option<u32>> {
    loop {
        print!("Chips: {bankroll}. Your bet (q to quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match line.parse::<u32>() {
            Ok(bet) if bet > 0 => return Ok(Some(bet)),
            _ => println!("Please enter a whole number of chips."),
        }
    }
}

/// Which dealer cards to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Show every card.
    All,
    /// Show only the first card; the rest render face down.
    HoleHidden,
}

/// Clears the screen and draws both hands.
pub fn render_table(player: &Deck, dealer: &Deck, reveal: Reveal) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    match reveal {
        Reveal::HoleHidden => {
            write!(out, "Dealer's hand (?):\r\n")?;
            for (index, card) in dealer.cards().iter().enumerate() {
                if index == 0 {
                    write!(out, "- {}\r\n", paint(*card))?;
                } else {
                    write!(out, "- ???\r\n")?;
                }
            }
        }
        Reveal::All => {
            write!(out, "Dealer's hand ({}):\r\n", totals_label(dealer))?;
            for card in dealer.cards() {
                write!(out, "- {}\r\n", paint(*card))?;
            }
        }
    }

    write!(out, "\r\nPlayer's hand ({}):\r\n", totals_label(player))?;
    for card in player.cards() {
        write!(out, "- {}\r\n", paint(*card))?;
    }
    write!(out, "\r\n")?;
    out.flush()
}

/// Prints one line in raw mode (explicit carriage return).
pub fn say(message: &str) -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "{message}\r\n")?;
    out.flush()
}

fn totals_label(hand: &Deck) -> String {
    let soft = if score::is_soft(hand) { "soft " } else { "" };
    format!("{soft}{}", score::points(hand))
}

fn paint(card: Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    format!("\u{1b}[{code}m{card}\u{1b}[0m")
}
