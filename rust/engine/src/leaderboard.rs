use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::errors::StoreError;
use crate::rules::Outcome;
use crate::store::{read_object, write_document, Saved};

/// Win/loss/tie counters for one player. `total_games` always equals the sum
/// of the other three.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub total_games: u32,
}

impl LeaderboardEntry {
    /// Counters stop at `u32::MAX` instead of wrapping.
    fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Win => &mut self.wins,
            Outcome::Loss => &mut self.losses,
            Outcome::Tie => &mut self.ties,
        };
        *counter = counter.saturating_add(1);
        self.total_games = self.total_games.saturating_add(1);
    }
}

/// Per-player results backed by `leaderboard.json`.
#[derive(Debug)]
pub struct Leaderboard {
    path: PathBuf,
    entries: BTreeMap<String, LeaderboardEntry>,
}

impl Leaderboard {
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let mut board = Self::empty(path);
        if let Some(map) = read_object(&board.path)? {
            board.entries = serde_json::from_value(serde_json::Value::Object(map)).map_err(
                |source| StoreError::Parse {
                    path: board.path.clone(),
                    source,
                },
            )?;
        }
        tracing::debug!(players = board.entries.len(), "leaderboard loaded");
        Ok(board)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, player: &str) -> Option<LeaderboardEntry> {
        self.entries.get(player).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts one finished round for `player`, creating a zeroed entry on first
    /// appearance, and saves.
    pub fn record(&mut self, player: &str, outcome: Outcome) -> Saved<LeaderboardEntry> {
        let entry = self.entries.entry(player.to_string()).or_default();
        entry.record(outcome);
        let updated = *entry;
        Saved::new(updated, self.save())
    }

    /// Entries ordered by wins (most first), then by name.
    pub fn standings(&self) -> Vec<(&str, LeaderboardEntry)> {
        let mut rows: Vec<(&str, LeaderboardEntry)> = self
            .entries
            .iter()
            .map(|(name, entry)| (name.as_str(), *entry))
            .collect();
        rows.sort_by(|a, b| b.1.wins.cmp(&a.1.wins).then_with(|| a.0.cmp(b.0)));
        rows
    }

    pub fn save(&self) -> Result<(), StoreError> {
        write_document(&self.path, &self.entries)
    }
}
