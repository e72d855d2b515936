//! # lucky9-engine: Lucky 9 Game Core
//!
//! Rules and persisted player state for the single-player card game Lucky 9.
//! A hand scores the sum of its card values mod 10; the player tries to finish
//! closer to nine than the banker.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card values 1 through 10 and the 40-card deck layout
//! - [`deck`] - Shuffled draw pile with ChaCha20 RNG and low-water reshuffle
//! - [`hand`] - Hand totals (mod 10) and the three-card limit
//! - [`odds`] - Remaining-card tally and the chance of drawing to nine
//! - [`rules`] - Bet validation, banker draw rule, outcome comparison
//! - [`round`] - One round from deal to settlement
//! - [`logger`] - Per-round action log
//! - [`balances`], [`leaderboard`], [`achievements`] - JSON-backed ledgers
//! - [`store`] - Shared JSON load/save helpers
//! - [`errors`] - Error types for game and storage operations
//!
//! ## Quick Start
//!
//! ```rust
//! use lucky9_engine::cards::Card;
//! use lucky9_engine::hand::hand_total;
//! use lucky9_engine::odds::probability_of_nine;
//!
//! let hand: Vec<Card> = [7, 8].iter().filter_map(|v| Card::new(*v)).collect();
//! assert_eq!(hand_total(&hand), 5);
//!
//! let remaining: Vec<Card> = [4, 2].iter().filter_map(|v| Card::new(*v)).collect();
//! assert_eq!(probability_of_nine(5, &remaining), 50.0);
//! ```
//!
//! ## Reproducible Shuffles
//!
//! ```rust
//! use lucky9_engine::deck::Deck;
//!
//! let d1 = Deck::new_with_seed(42);
//! let d2 = Deck::new_with_seed(42);
//! assert_eq!(d1.remaining_cards(), d2.remaining_cards());
//! ```

pub mod achievements;
pub mod balances;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod leaderboard;
pub mod logger;
pub mod odds;
pub mod round;
pub mod rules;
pub mod store;
