use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::errors::GameError;

/// The best possible total.
pub const LUCKY_NINE: u8 = 9;
/// A hand never grows past the two dealt cards plus one draw.
pub const MAX_CARDS: usize = 3;

/// Lucky 9 total of any sequence of cards: the sum of values mod 10.
pub fn hand_total(cards: &[Card]) -> u8 {
    let sum: u32 = cards.iter().map(|c| c.value() as u32).sum();
    (sum % 10) as u8
}

/// Cards held by the player or the banker during one round.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(MAX_CARDS),
        }
    }

    pub fn from_cards(cards: &[Card]) -> Result<Self, GameError> {
        let mut hand = Hand::new();
        for &c in cards {
            hand.push(c)?;
        }
        Ok(hand)
    }

    pub fn push(&mut self, card: Card) -> Result<(), GameError> {
        if self.cards.len() >= MAX_CARDS {
            return Err(GameError::HandFull { max: MAX_CARDS });
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True while a third card may still be drawn.
    pub fn can_draw(&self) -> bool {
        self.cards.len() < MAX_CARDS
    }

    pub fn total(&self) -> u8 {
        hand_total(&self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}
