use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::errors::StoreError;
use crate::rules::replenished_balance;
use crate::store::{read_object, write_document, Saved};

/// Balance every new player starts with unless configured otherwise.
pub const DEFAULT_STARTING_BALANCE: i64 = 100;

/// One player's money.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// Fixed when the entry is created.
    pub initial_balance: i64,
    pub current_balance: i64,
}

impl BalanceEntry {
    pub fn new(starting_balance: i64) -> Self {
        Self {
            initial_balance: starting_balance,
            current_balance: starting_balance,
        }
    }

    pub fn profit(&self) -> i64 {
        self.current_balance.saturating_sub(self.initial_balance)
    }
}

/// Per-player balances backed by `balances.json`.
///
/// Every mutation rewrites the file. When a save fails the in-memory change is
/// kept and the error is handed back so the caller can report it.
#[derive(Debug)]
pub struct Balances {
    path: PathBuf,
    starting_balance: i64,
    entries: BTreeMap<String, BalanceEntry>,
    skipped: Vec<String>,
}

impl Balances {
    pub fn empty(path: impl Into<PathBuf>, starting_balance: i64) -> Self {
        Self {
            path: path.into(),
            starting_balance,
            entries: BTreeMap::new(),
            skipped: Vec::new(),
        }
    }

    /// Loads the ledger. Entries without both balance fields are skipped and
    /// listed by [`Balances::skipped_entries`].
    pub fn load(path: impl Into<PathBuf>, starting_balance: i64) -> Result<Self, StoreError> {
        let mut ledger = Self::empty(path, starting_balance);
        let Some(map) = read_object(&ledger.path)? else {
            return Ok(ledger);
        };
        for (name, value) in map {
            match serde_json::from_value::<BalanceEntry>(value) {
                Ok(entry) => {
                    ledger.entries.insert(name, entry);
                }
                Err(e) => {
                    tracing::warn!(player = %name, error = %e, "skipping invalid balance entry");
                    ledger.skipped.push(name);
                }
            }
        }
        tracing::debug!(players = ledger.entries.len(), "balances loaded");
        Ok(ledger)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Player names whose stored entries were malformed at load time.
    pub fn skipped_entries(&self) -> &[String] {
        &self.skipped
    }

    pub fn get(&self, player: &str) -> Option<BalanceEntry> {
        self.entries.get(player).copied()
    }

    /// Returns the player's entry, creating and saving a fresh one if needed.
    ///
    /// The entry is returned even when saving the new record fails.
    pub fn get_or_create(&mut self, player: &str) -> Saved<BalanceEntry> {
        if let Some(entry) = self.entries.get(player) {
            return Saved::new(*entry, Ok(()));
        }
        let entry = BalanceEntry::new(self.starting_balance);
        self.entries.insert(player.to_string(), entry);
        Saved::new(entry, self.save())
    }

    /// Adds the bet, saturating at `i64::MAX`.
    pub fn apply_win(&mut self, player: &str, bet: i64) -> Saved<BalanceEntry> {
        let starting = self.starting_balance;
        let entry = self
            .entries
            .entry(player.to_string())
            .or_insert_with(|| BalanceEntry::new(starting));
        entry.current_balance = entry.current_balance.saturating_add(bet);
        let updated = *entry;
        Saved::new(updated, self.save())
    }

    /// Deducts the bet. A balance that reaches zero or below is reset to half
    /// the initial balance.
    pub fn apply_loss(&mut self, player: &str, bet: i64) -> Saved<BalanceEntry> {
        let starting = self.starting_balance;
        let entry = self
            .entries
            .entry(player.to_string())
            .or_insert_with(|| BalanceEntry::new(starting));
        entry.current_balance = entry.current_balance.saturating_sub(bet);
        if entry.current_balance <= 0 {
            entry.current_balance = replenished_balance(entry.initial_balance);
            tracing::debug!(player, balance = entry.current_balance, "balance replenished");
        }
        let updated = *entry;
        Saved::new(updated, self.save())
    }

    pub fn save(&self) -> Result<(), StoreError> {
        write_document(&self.path, &self.entries)
    }
}
