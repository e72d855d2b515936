use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::errors::StoreError;
use crate::store::{read_object, write_document, Saved};

/// Unlocked by hitting to a total of exactly nine.
pub const LUCKY_NINE_MASTER: &str = "Lucky Nine Master";
pub const LUCKY_NINE_MASTER_DESCRIPTION: &str = "You achieved a perfect 9!";

/// Per-player unlocked achievements (title to description) backed by
/// `achievements.json`. Titles are never removed.
#[derive(Debug)]
pub struct Achievements {
    path: PathBuf,
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl Achievements {
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let mut ledger = Self::empty(path);
        if let Some(map) = read_object(&ledger.path)? {
            ledger.entries = serde_json::from_value(serde_json::Value::Object(map)).map_err(
                |source| StoreError::Parse {
                    path: ledger.path.clone(),
                    source,
                },
            )?;
        }
        tracing::debug!(players = ledger.entries.len(), "achievements loaded");
        Ok(ledger)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unlocks `title` for `player`. Returns `true` in [`Saved::value`] when the
    /// title is new; an existing title keeps its original description and
    /// nothing is written.
    pub fn grant(&mut self, player: &str, title: &str, description: &str) -> Saved<bool> {
        let unlocked = self.entries.entry(player.to_string()).or_default();
        if unlocked.contains_key(title) {
            return Saved::new(false, Ok(()));
        }
        unlocked.insert(title.to_string(), description.to_string());
        tracing::debug!(player, title, "achievement unlocked");
        Saved::new(true, self.save())
    }

    pub fn has(&self, player: &str, title: &str) -> bool {
        self.entries
            .get(player)
            .is_some_and(|unlocked| unlocked.contains_key(title))
    }

    /// `(title, description)` pairs for `player`, empty when none are unlocked.
    pub fn for_player(&self, player: &str) -> Vec<(&str, &str)> {
        self.entries
            .get(player)
            .map(|unlocked| {
                unlocked
                    .iter()
                    .map(|(t, d)| (t.as_str(), d.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), StoreError> {
        write_document(&self.path, &self.entries)
    }
}
