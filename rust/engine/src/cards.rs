use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest card value in the shoe.
pub const MIN_VALUE: u8 = 1;
/// Highest card value in the shoe.
pub const MAX_VALUE: u8 = 10;
/// Copies of each value in a fresh deck.
pub const COPIES_PER_VALUE: usize = 4;
/// Size of a fresh deck (4 copies of 1 through 10).
pub const DECK_SIZE: usize = COPIES_PER_VALUE * MAX_VALUE as usize;

/// A single Lucky 9 card. Suits play no part in the game, only the value does.
///
/// Values outside `1..=10` cannot be constructed, so every `Card` held by a
/// [`crate::hand::Hand`] or [`crate::deck::Deck`] is valid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Builds a card, returning `None` for values outside `1..=10`.
    pub fn new(value: u8) -> Option<Card> {
        (MIN_VALUE..=MAX_VALUE).contains(&value).then_some(Card(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Card {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Card::new(value).ok_or_else(|| format!("card value {} outside 1..=10", value))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn all_values() -> [Card; 10] {
    [
        Card(1),
        Card(2),
        Card(3),
        Card(4),
        Card(5),
        Card(6),
        Card(7),
        Card(8),
        Card(9),
        Card(10),
    ]
}

/// Unshuffled 40-card deck, values 1..=10 repeated four times.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for _ in 0..COPIES_PER_VALUE {
        v.extend_from_slice(&all_values());
    }
    v
}
