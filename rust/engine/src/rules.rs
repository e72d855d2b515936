use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::errors::GameError;
use crate::hand::Hand;

/// Result of a round from the player's side.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::Tie => "tie",
        }
    }

    /// Line recorded in the action log and shown to the player.
    pub fn announcement(&self) -> &'static str {
        match self {
            Outcome::Win => "Player wins!",
            Outcome::Loss => "Banker wins!",
            Outcome::Tie => "It's a tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compares final totals. Higher total wins, equal totals tie.
pub fn decide(player_total: u8, banker_total: u8) -> Outcome {
    match player_total.cmp(&banker_total) {
        Ordering::Greater => Outcome::Win,
        Ordering::Less => Outcome::Loss,
        Ordering::Equal => Outcome::Tie,
    }
}

/// Fixed banker rule, evaluated once after the player acts.
///
/// The banker takes a third card when it holds fewer than three cards and
/// either totals under 3, or totals under 6 while trailing the player.
///
/// ```
/// use lucky9_engine::cards::Card;
/// use lucky9_engine::hand::Hand;
/// use lucky9_engine::rules::banker_draws;
///
/// let c = |v| Card::new(v).unwrap();
/// let banker = Hand::from_cards(&[c(2), c(2)]).unwrap(); // total 4
/// assert!(banker_draws(&banker, 7));
/// assert!(!banker_draws(&banker, 3));
/// ```
pub fn banker_draws(banker: &Hand, player_total: u8) -> bool {
    let banker_total = banker.total();
    banker.can_draw() && (banker_total < 3 || (banker_total < 6 && player_total > banker_total))
}

/// Checks a wager against the player's balance.
///
/// # Errors
///
/// - [`GameError::InsufficientFunds`] when the balance is zero or negative
/// - [`GameError::InvalidBetAmount`] when the bet is outside `1..=balance`
///
/// ```
/// use lucky9_engine::errors::GameError;
/// use lucky9_engine::rules::validate_bet;
///
/// assert_eq!(validate_bet(5, 5), Ok(5));
/// assert!(matches!(validate_bet(10, 5), Err(GameError::InvalidBetAmount { .. })));
/// assert!(matches!(validate_bet(1, 0), Err(GameError::InsufficientFunds { .. })));
/// ```
pub fn validate_bet(bet: i64, balance: i64) -> Result<i64, GameError> {
    if balance <= 0 {
        return Err(GameError::InsufficientFunds { balance });
    }
    if bet < 1 || bet > balance {
        return Err(GameError::InvalidBetAmount {
            amount: bet,
            maximum: balance,
        });
    }
    Ok(bet)
}

/// Balance granted after ruin: half the initial balance, rounded down.
pub fn replenished_balance(initial_balance: i64) -> i64 {
    initial_balance.div_euclid(2)
}
