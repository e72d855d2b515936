use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, must be between 1 and {maximum}")]
    InvalidBetAmount { amount: i64, maximum: i64 },
    #[error("Insufficient funds: balance is {balance}")]
    InsufficientFunds { balance: i64 },
    #[error("Hand already holds {max} cards")]
    HandFull { max: usize },
    #[error("Deck is empty")]
    DeckEmpty,
    #[error("Round is not in the {expected} phase")]
    WrongPhase { expected: &'static str },
}

/// Failure reading or writing one of the JSON ledger files.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: expected a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },
}

impl StoreError {
    /// The ledger file involved.
    pub fn path(&self) -> &Path {
        match self {
            StoreError::Io { path, .. }
            | StoreError::Parse { path, .. }
            | StoreError::Serialize { path, .. }
            | StoreError::NotAnObject { path } => path,
        }
    }
}
