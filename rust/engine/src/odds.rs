use std::fmt;

use crate::cards::{all_values, Card};
use crate::hand::LUCKY_NINE;

/// Remaining copies of each card value, indexed by value.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct CardCount {
    // index 0 unused
    counts: [usize; 11],
}

impl CardCount {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0usize; 11];
        for card in cards {
            counts[card.value() as usize] += 1;
        }
        Self { counts }
    }

    pub fn get(&self, card: Card) -> usize {
        self.counts[card.value() as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(card, remaining)` pairs in ascending card order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (Card, usize)> + '_ {
        all_values().into_iter().map(|c| (c, self.get(c)))
    }

    /// Same as [`probability_of_nine`] over the multiset this count describes.
    pub fn probability_of_nine(&self, current_total: u8) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let hits: usize = self
            .iter()
            .filter(|(c, _)| makes_nine(current_total, *c))
            .map(|(_, n)| n)
            .sum();
        hits as f64 / total as f64 * 100.0
    }
}

impl fmt::Display for CardCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (card, n)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", card, n)?;
        }
        write!(f, "}}")
    }
}

fn makes_nine(current_total: u8, card: Card) -> bool {
    (current_total as u32 + card.value() as u32) % 10 == LUCKY_NINE as u32
}

/// Percentage (0..=100) of `remaining` cards that would bring a hand totalling
/// `current_total` to exactly nine. Returns 0.0 for an empty slice.
///
/// # Examples
///
/// ```
/// use lucky9_engine::cards::Card;
/// use lucky9_engine::odds::probability_of_nine;
///
/// let remaining: Vec<Card> = [4, 4, 1, 9].iter().filter_map(|v| Card::new(*v)).collect();
/// // 5 + 4 = 9 for two of the four cards
/// assert_eq!(probability_of_nine(5, &remaining), 50.0);
/// assert_eq!(probability_of_nine(5, &[]), 0.0);
/// ```
pub fn probability_of_nine(current_total: u8, remaining: &[Card]) -> f64 {
    if remaining.is_empty() {
        return 0.0;
    }
    let hits = remaining
        .iter()
        .filter(|c| makes_nine(current_total, **c))
        .count();
    hits as f64 / remaining.len() as f64 * 100.0
}
