//! Chip balance persistence and session settlement.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};

use crate::error::BankrollError;
use crate::outcome::Outcome;

/// The on-disk chip record: a single native-endian `u32`, no header.
///
/// The record is read once at session start and rewritten once after each
/// completed round. There is no cross-process coordination; a second session
/// against the same record would race it.
#[derive(Debug, Clone)]
pub struct ChipVault {
    path: PathBuf,
}

impl ChipVault {
    /// Creates a vault backed by the record at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the record path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the balance. An absent record reads as zero (first run).
    ///
    /// # Errors
    ///
    /// Returns an error if the record exists but cannot be read.
    pub fn load(&self) -> Result<u32, BankrollError> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(BankrollError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        file.read_u32::<NativeEndian>()
            .map_err(|source| BankrollError::Read {
                path: self.path.clone(),
                source,
            })
    }

    /// Writes the balance, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be opened or written; callers
    /// treat this as fatal.
    pub fn save(&self, chips: u32) -> Result<(), BankrollError> {
        let write_err = |source| BankrollError::Write {
            path: self.path.clone(),
            source,
        };
        let mut file = File::create(&self.path).map_err(write_err)?;
        file.write_u32::<NativeEndian>(chips).map_err(write_err)
    }
}

/// A play session: the live bankroll plus its backing record.
#[derive(Debug)]
pub struct Session {
    bankroll: u32,
    vault: ChipVault,
}

impl Session {
    /// Opens a session from the record behind `vault`.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing record cannot be read.
    pub fn resume(vault: ChipVault) -> Result<Self, BankrollError> {
        let bankroll = vault.load()?;
        log::info!("session resumed with {bankroll} chips");
        Ok(Self { bankroll, vault })
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn bankroll(&self) -> u32 {
        self.bankroll
    }

    /// Applies one round's result and saves the record.
    ///
    /// Called exactly once per completed round: the balance moves by the bet
    /// on a win or loss and stays put on a push. A loss larger than the
    /// balance clamps to zero rather than wrapping. Quitting mid-round never
    /// reaches this point, which is how an unfinished round's bet is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written; the caller treats
    /// this as fatal.
    pub fn settle(&mut self, bet: u32, outcome: Outcome) -> Result<u32, BankrollError> {
        self.bankroll = match outcome {
            Outcome::Win => self.bankroll.saturating_add(bet),
            Outcome::Loss => self.bankroll.saturating_sub(bet),
            Outcome::Push => self.bankroll,
        };
        self.vault.save(self.bankroll)?;
        log::debug!("settled {outcome:?} for {bet}: balance {}", self.bankroll);
        Ok(self.bankroll)
    }
}
