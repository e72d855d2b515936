//! One interactive round: bet, deal, hit/stand/view, banker draw, settle.

use crate::error::CliError;
use crate::formatters::{format_hand, format_percentage};
use crate::io_utils::prompt_until;
use crate::session::{Session, report_save_error};
use crate::ui;
use crate::validation::{Decision, parse_bet, parse_decision};
use lucky9_engine::achievements::{LUCKY_NINE_MASTER, LUCKY_NINE_MASTER_DESCRIPTION};
use lucky9_engine::logger::ActionLog;
use lucky9_engine::round::{HitResult, Phase, Round};
use std::io::{BufRead, Write};

/// Plays one round for `session.player`.
///
/// Returns the round's action log, or `None` when the player had nothing to
/// bet and the round was skipped.
pub fn handle_play_command(
    session: &mut Session,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<ActionLog>, CliError> {
    let player = session.player.clone();
    let (entry, save_err) = session.ledgers.balances.get_or_create(&player).into_parts();
    report_save_error(err, save_err)?;

    let balance = entry.current_balance;
    if balance <= 0 {
        writeln!(out, "{}, your balance is 0. Cannot place a bet.", player)?;
        writeln!(out, "{} has insufficient funds or bet was invalid. Round skipped.", player)?;
        return Ok(None);
    }

    let bet = prompt_until(
        out,
        err,
        stdin,
        &format!("Enter your bet amount (1 - {}): ", balance),
        |input| parse_bet(input, balance),
    )?;

    let mut round = Round::deal(bet, &mut session.deck)?;
    if round.reshuffled() {
        writeln!(out, "Not enough cards to continue the game. Re-initializing deck.")?;
    }
    writeln!(out, "{}", ui::RULE)?;
    writeln!(out, "{}", format_hand("Player's hand", round.player()))?;
    writeln!(out, "{}", format_hand("Banker's hand", round.banker()))?;
    writeln!(out, "{}", ui::RULE)?;

    while round.phase() == Phase::PlayerDecision {
        let count = session.deck.card_count();
        writeln!(
            out,
            "Probability of hitting a Lucky 9: {}",
            format_percentage(count.probability_of_nine(round.player_total()))
        )?;
        let decision = prompt_until(
            out,
            err,
            stdin,
            "Do you want to hit, stand, or view remaining cards? (hit/stand/view): ",
            parse_decision,
        )?;
        match decision {
            Decision::Hit => match round.hit(&mut session.deck)? {
                HitResult::DeckEmpty => writeln!(out, "No more cards left in the deck.")?,
                HitResult::Drew { card, total } => {
                    writeln!(out, "You drew a card with value: {}", card)?;
                    writeln!(out, "Your cards: {} | Total: {}", round.player(), total)?;
                    if round.lucky_nine_hit() {
                        let (unlocked, save_err) = session
                            .ledgers
                            .achievements
                            .grant(&player, LUCKY_NINE_MASTER, LUCKY_NINE_MASTER_DESCRIPTION)
                            .into_parts();
                        report_save_error(err, save_err)?;
                        if unlocked {
                            writeln!(out, "Achievement unlocked: {}!", LUCKY_NINE_MASTER)?;
                        }
                    }
                }
            },
            Decision::Stand => {
                round.stand()?;
                writeln!(out, "You chose to stand.")?;
            }
            Decision::View => {
                writeln!(out, "Remaining cards in the deck:")?;
                writeln!(out, "{}", count)?;
            }
        }
    }

    round.banker_turn(&mut session.deck)?;
    writeln!(out, "{}", ui::RULE)?;
    writeln!(out, "{}", format_hand("Final Player's hand", round.player()))?;
    writeln!(out, "{}", format_hand("Final Banker's hand", round.banker()))?;
    writeln!(out, "{}", ui::RULE)?;

    let settlement = round.settle(
        &player,
        &mut session.ledgers.balances,
        &mut session.ledgers.leaderboard,
    )?;
    writeln!(out, "{}", settlement.outcome.announcement())?;
    for e in settlement.save_errors {
        report_save_error(err, Some(e))?;
    }
    tracing::info!(
        player = %player,
        outcome = settlement.outcome.as_str(),
        balance = settlement.balance.current_balance,
        "round finished"
    );
    Ok(Some(round.into_log()))
}
