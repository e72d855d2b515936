//! Ledgers and deck shared by the commands of one program run.

use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use lucky9_engine::achievements::Achievements;
use lucky9_engine::balances::Balances;
use lucky9_engine::deck::Deck;
use lucky9_engine::errors::StoreError;
use lucky9_engine::leaderboard::Leaderboard;
use std::io::Write;

/// The three JSON ledgers.
#[derive(Debug)]
pub struct Ledgers {
    pub balances: Balances,
    pub leaderboard: Leaderboard,
    pub achievements: Achievements,
}

impl Ledgers {
    /// Loads every ledger from the data directory. A file that cannot be read
    /// is reported on `err` and replaced by an empty ledger.
    pub fn open(config: &Config, err: &mut dyn Write) -> Result<Self, CliError> {
        let balances = match Balances::load(config.balances_path(), config.starting_balance) {
            Ok(ledger) => {
                for player in ledger.skipped_entries() {
                    ui::display_warning(
                        err,
                        &format!("Skipping invalid balance entry for player {}", player),
                    )?;
                }
                ledger
            }
            Err(e) => {
                report_load_error(err, "balances", &e)?;
                Balances::empty(config.balances_path(), config.starting_balance)
            }
        };
        let leaderboard = match Leaderboard::load(config.leaderboard_path()) {
            Ok(ledger) => ledger,
            Err(e) => {
                report_load_error(err, "leaderboard", &e)?;
                Leaderboard::empty(config.leaderboard_path())
            }
        };
        let achievements = match Achievements::load(config.achievements_path()) {
            Ok(ledger) => ledger,
            Err(e) => {
                report_load_error(err, "achievements", &e)?;
                Achievements::empty(config.achievements_path())
            }
        };
        Ok(Self {
            balances,
            leaderboard,
            achievements,
        })
    }
}

fn report_load_error(err: &mut dyn Write, ledger: &str, e: &StoreError) -> std::io::Result<()> {
    ui::write_error(err, &format!("Error loading {}: {}", ledger, e))
}

/// Reports a failed save. The game keeps the in-memory change either way.
pub fn report_save_error(err: &mut dyn Write, error: Option<StoreError>) -> std::io::Result<()> {
    let Some(e) = error else {
        return Ok(());
    };
    let ledger = e
        .path()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ledger".to_string());
    ui::write_error(err, &format!("Error saving {}: {}", ledger, e))
}

/// State of the interactive game.
#[derive(Debug)]
pub struct Session {
    pub player: String,
    pub deck: Deck,
    pub ledgers: Ledgers,
}

impl Session {
    pub fn new(config: &Config, player: String, ledgers: Ledgers) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::debug!(seed, "deck seeded");
        Self {
            player,
            deck: Deck::new_with_seed(seed),
            ledgers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn missing_files_open_as_empty_ledgers() {
        let dir = tempfile::tempdir().unwrap();
        let mut err = Vec::new();
        let ledgers = Ledgers::open(&config_in(dir.path()), &mut err).unwrap();
        assert!(ledgers.leaderboard.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn corrupt_files_are_reported_and_replaced() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("leaderboard.json"), "{not json").unwrap();
        fs::write(dir.path().join("balances.json"), "[1, 2]").unwrap();
        let mut err = Vec::new();
        let ledgers = Ledgers::open(&config_in(dir.path()), &mut err).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("Error: Error loading balances:"));
        assert!(err.contains("Error: Error loading leaderboard:"));
        assert!(ledgers.leaderboard.is_empty());
        assert_eq!(ledgers.balances.get("anyone"), None);
    }

    #[test]
    fn skipped_balance_entries_are_warned() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("balances.json"),
            r#"{"Zed": {"initial_balance": 100}}"#,
        )
        .unwrap();
        let mut err = Vec::new();
        Ledgers::open(&config_in(dir.path()), &mut err).unwrap();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "WARNING: Skipping invalid balance entry for player Zed\n"
        );
    }

    #[test]
    fn save_errors_name_the_ledger() {
        let e = StoreError::NotAnObject {
            path: std::path::PathBuf::from("/data/balances.json"),
        };
        let mut err = Vec::new();
        report_save_error(&mut err, Some(e)).unwrap();
        let text = String::from_utf8(err).unwrap();
        assert!(text.starts_with("Error: Error saving balances: /data/balances.json"));

        let mut err = Vec::new();
        report_save_error(&mut err, None).unwrap();
        assert!(err.is_empty());
    }

    #[test]
    fn seeded_sessions_shuffle_identically() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            seed: Some(11),
            ..config_in(dir.path())
        };
        let mut err = Vec::new();
        let a = Session::new(&config, "A".into(), Ledgers::open(&config, &mut err).unwrap());
        let b = Session::new(&config, "B".into(), Ledgers::open(&config, &mut err).unwrap());
        assert_eq!(a.deck.remaining_cards(), b.deck.remaining_cards());
    }
}
