use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::odds::CardCount;

/// A deal is never started with fewer cards than this; the deck is rebuilt first.
pub const LOW_WATER_MARK: usize = 6;

/// The shared draw pile for player and banker.
///
/// Cards are drawn from the end of the sequence. The remaining-card tally shown
/// to the player is always computed from `cards`, so it cannot drift from what
/// is actually left to draw.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Creates a freshly shuffled 40-card deck. The same seed always yields the
    /// same sequence of shuffles.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Creates a deck holding exactly `cards`, in that order. The last card is
    /// drawn first. Later reshuffles use `seed`.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the contents with a full 40-card deck in random order.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Rebuilds the deck when fewer than [`LOW_WATER_MARK`] cards remain.
    /// Returns `true` when a reshuffle happened.
    pub fn reinitialize_if_low(&mut self) -> bool {
        if self.cards.len() >= LOW_WATER_MARK {
            return false;
        }
        tracing::debug!(remaining = self.cards.len(), "deck low, reshuffling");
        self.shuffle();
        true
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_count(&self) -> CardCount {
        CardCount::from_cards(&self.cards)
    }
}
