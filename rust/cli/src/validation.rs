//! Input parsing and validation for interactive commands.
//!
//! Each parser takes the trimmed answer to one prompt and returns either the
//! typed value or the message to show before asking again.

use lucky9_engine::errors::GameError;
use lucky9_engine::rules::validate_bet;

/// Entries of the main menu, keyed by the number the player types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Leaderboard,
    ChangeName,
    Exit,
    Achievements,
    Balance,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Play,
        MenuChoice::Leaderboard,
        MenuChoice::ChangeName,
        MenuChoice::Exit,
        MenuChoice::Achievements,
        MenuChoice::Balance,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::Play => "1",
            MenuChoice::Leaderboard => "2",
            MenuChoice::ChangeName => "3",
            MenuChoice::Exit => "4",
            MenuChoice::Achievements => "5",
            MenuChoice::Balance => "6",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Play => "Play Game",
            MenuChoice::Leaderboard => "View Leaderboard",
            MenuChoice::ChangeName => "Change Player Name",
            MenuChoice::Exit => "Exit",
            MenuChoice::Achievements => "View Achievements",
            MenuChoice::Balance => "View Balance",
        }
    }
}

/// The player's options while the round waits on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
    View,
}

fn invalid_choice(choices: &[&str]) -> String {
    format!(
        "Invalid input. Please enter one of: {}.",
        choices.join(", ")
    )
}

/// # Example
///
/// ```rust
/// # use lucky9_cli::validation::{parse_menu_choice, MenuChoice};
/// assert_eq!(parse_menu_choice("4"), Ok(MenuChoice::Exit));
/// assert!(parse_menu_choice("7").is_err());
/// ```
pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, String> {
    let input = input.trim();
    MenuChoice::ALL
        .iter()
        .copied()
        .find(|choice| choice.key() == input)
        .ok_or_else(|| {
            let keys: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.key()).collect();
            invalid_choice(&keys)
        })
}

/// Accepts `hit`, `stand` or `view`, case-insensitive.
pub fn parse_decision(input: &str) -> Result<Decision, String> {
    match input.trim().to_lowercase().as_str() {
        "hit" => Ok(Decision::Hit),
        "stand" => Ok(Decision::Stand),
        "view" => Ok(Decision::View),
        _ => Err(invalid_choice(&["hit", "stand", "view"])),
    }
}

pub fn parse_yes_no(input: &str) -> Result<bool, String> {
    match input.trim().to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(invalid_choice(&["yes", "no"])),
    }
}

/// Parses a bet for a player holding `balance`.
///
/// Only plain digit strings count as numbers, so signs and decimals are
/// rejected as non-numeric.
///
/// # Example
///
/// ```rust
/// # use lucky9_cli::validation::parse_bet;
/// assert_eq!(parse_bet("20", 100), Ok(20));
/// assert_eq!(
///     parse_bet("150", 100),
///     Err("Invalid bet amount. Must be between 1 and 100.".to_string())
/// );
/// assert_eq!(
///     parse_bet("-5", 100),
///     Err("Invalid input. Please enter a valid number.".to_string())
/// );
/// ```
pub fn parse_bet(input: &str, balance: i64) -> Result<i64, String> {
    let input = input.trim();
    let not_a_number = || "Invalid input. Please enter a valid number.".to_string();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(not_a_number());
    }
    let amount: i64 = input.parse().map_err(|_| not_a_number())?;
    validate_bet(amount, balance).map_err(|e| match e {
        GameError::InvalidBetAmount { maximum, .. } => {
            format!("Invalid bet amount. Must be between 1 and {}.", maximum)
        }
        other => other.to_string(),
    })
}

/// Player names must contain something other than whitespace.
pub fn parse_player_name(input: &str) -> Result<String, String> {
    let name = input.trim();
    if name.is_empty() {
        Err("Player name cannot be empty.".to_string())
    } else {
        Ok(name.to_string())
    }
}
