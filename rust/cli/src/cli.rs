//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lucky9",
    version,
    about = "Lucky 9 card game for the terminal"
)]
pub struct Lucky9Cli {
    /// Player name; skips the name prompt
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Directory holding balances.json, leaderboard.json and achievements.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Seed for a reproducible shuffle
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive menu (default)
    Play,
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Print the leaderboard and exit
    Leaderboard,
}
