use crate::balances::{BalanceEntry, Balances};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{GameError, StoreError};
use crate::hand::{Hand, LUCKY_NINE};
use crate::leaderboard::Leaderboard;
use crate::logger::ActionLog;
use crate::rules::{banker_draws, decide, Outcome};

/// Where a round stands. Betting happens before a [`Round`] exists, so a live
/// round starts in [`Phase::PlayerDecision`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    PlayerDecision,
    BankerDraw,
    Settle,
    Done,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::PlayerDecision => "player decision",
            Phase::BankerDraw => "banker draw",
            Phase::Settle => "settle",
            Phase::Done => "done",
        }
    }
}

/// What a hit produced.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HitResult {
    Drew { card: Card, total: u8 },
    /// Nothing left to draw; the player keeps the current hand.
    DeckEmpty,
}

/// Ledger changes made when a round is settled.
#[derive(Debug)]
pub struct Settlement {
    pub outcome: Outcome,
    pub balance: BalanceEntry,
    /// Saves that failed. The in-memory ledgers are updated regardless.
    pub save_errors: Vec<StoreError>,
}

/// One round of Lucky 9 between the player and the banker.
///
/// # Examples
///
/// ```
/// use lucky9_engine::cards::Card;
/// use lucky9_engine::deck::Deck;
/// use lucky9_engine::round::{Phase, Round};
///
/// // Drawn from the end: player 4, banker 1, player 5, banker 2.
/// let order: Vec<Card> = [3, 3, 3, 2, 5, 1, 4].iter().filter_map(|v| Card::new(*v)).collect();
/// let mut deck = Deck::from_cards(order, 7);
/// let mut round = Round::deal(10, &mut deck).unwrap();
/// assert_eq!(round.player_total(), 9);
/// assert_eq!(round.banker_total(), 3);
///
/// round.stand().unwrap();
/// // banker trails on 3 and draws
/// assert!(round.banker_turn(&mut deck).unwrap().is_some());
/// assert_eq!(round.phase(), Phase::Settle);
/// ```
#[derive(Debug)]
pub struct Round {
    bet: i64,
    player: Hand,
    banker: Hand,
    phase: Phase,
    reshuffled: bool,
    lucky_nine_hit: bool,
    log: ActionLog,
}

impl Round {
    /// Rebuilds the deck if it is running low, then deals two cards each,
    /// alternating and player first.
    pub fn deal(bet: i64, deck: &mut Deck) -> Result<Round, GameError> {
        let reshuffled = deck.reinitialize_if_low();
        let mut player = Hand::new();
        let mut banker = Hand::new();
        for _ in 0..2 {
            player.push(deck.draw().ok_or(GameError::DeckEmpty)?)?;
            banker.push(deck.draw().ok_or(GameError::DeckEmpty)?)?;
        }

        let mut log = ActionLog::new();
        log.push(format!(
            "Player's initial hand: {} (total: {})",
            player,
            player.total()
        ));
        log.push(format!(
            "Banker's initial hand: {} (total: {})",
            banker,
            banker.total()
        ));

        let phase = if player.can_draw() {
            Phase::PlayerDecision
        } else {
            Phase::BankerDraw
        };
        Ok(Round {
            bet,
            player,
            banker,
            phase,
            reshuffled,
            lucky_nine_hit: false,
            log,
        })
    }

    pub fn bet(&self) -> i64 {
        self.bet
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn player(&self) -> &Hand {
        &self.player
    }
    pub fn banker(&self) -> &Hand {
        &self.banker
    }
    pub fn player_total(&self) -> u8 {
        self.player.total()
    }
    pub fn banker_total(&self) -> u8 {
        self.banker.total()
    }
    /// True when the deck was rebuilt before this round's deal.
    pub fn reshuffled(&self) -> bool {
        self.reshuffled
    }
    /// True when the player's hit brought the hand to exactly nine.
    pub fn lucky_nine_hit(&self) -> bool {
        self.lucky_nine_hit
    }
    pub fn log(&self) -> &ActionLog {
        &self.log
    }
    pub fn into_log(self) -> ActionLog {
        self.log
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected: expected.as_str(),
            })
        }
    }

    /// Draws the player's single extra card. Either way the decision phase is over.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<HitResult, GameError> {
        self.expect_phase(Phase::PlayerDecision)?;
        self.phase = Phase::BankerDraw;
        let Some(card) = deck.draw() else {
            self.log.push("Hit attempted, but deck empty.");
            return Ok(HitResult::DeckEmpty);
        };
        self.player.push(card)?;
        let total = self.player.total();
        self.log.push(format!(
            "Player hits and draws: {} | New total: {}",
            card, total
        ));
        if total == LUCKY_NINE {
            self.lucky_nine_hit = true;
            self.log.push("Player hits Lucky 9!");
        }
        Ok(HitResult::Drew { card, total })
    }

    /// Keeps the current hand. Returns the player's total.
    pub fn stand(&mut self) -> Result<u8, GameError> {
        self.expect_phase(Phase::PlayerDecision)?;
        self.phase = Phase::BankerDraw;
        let total = self.player.total();
        self.log.push(format!("Player stands with total: {}", total));
        Ok(total)
    }

    /// Applies the fixed banker rule once. Returns the card drawn, if any.
    pub fn banker_turn(&mut self, deck: &mut Deck) -> Result<Option<Card>, GameError> {
        self.expect_phase(Phase::BankerDraw)?;
        self.phase = Phase::Settle;
        if !banker_draws(&self.banker, self.player.total()) {
            return Ok(None);
        }
        let Some(card) = deck.draw() else {
            self.log.push("Banker draw skipped, deck empty.");
            return Ok(None);
        };
        self.banker.push(card)?;
        self.log.push(format!(
            "Banker draws: {} | New total: {}",
            card,
            self.banker.total()
        ));
        Ok(Some(card))
    }

    /// Outcome from the current totals.
    pub fn outcome(&self) -> Outcome {
        decide(self.player.total(), self.banker.total())
    }

    /// Records the result on the leaderboard and moves the bet on the
    /// player's balance. Ties leave the balance unchanged.
    pub fn settle(
        &mut self,
        player_name: &str,
        balances: &mut Balances,
        leaderboard: &mut Leaderboard,
    ) -> Result<Settlement, GameError> {
        self.expect_phase(Phase::Settle)?;
        self.phase = Phase::Done;
        let outcome = self.outcome();
        self.log.push(outcome.announcement());

        let mut save_errors = Vec::new();
        let (_, err) = leaderboard.record(player_name, outcome).into_parts();
        save_errors.extend(err);

        let saved = match outcome {
            Outcome::Win => balances.apply_win(player_name, self.bet),
            Outcome::Loss => balances.apply_loss(player_name, self.bet),
            Outcome::Tie => balances.get_or_create(player_name),
        };
        let (balance, err) = saved.into_parts();
        save_errors.extend(err);

        tracing::debug!(
            player = player_name,
            outcome = outcome.as_str(),
            bet = self.bet,
            balance = balance.current_balance,
            "round settled"
        );
        Ok(Settlement {
            outcome,
            balance,
            save_errors,
        })
    }
}
