//! The interactive main menu.

use super::{
    handle_achievements_command, handle_balance_command, handle_leaderboard_command,
    handle_play_command,
};
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_history;
use crate::io_utils::prompt_until;
use crate::session::{Ledgers, Session, report_save_error};
use crate::ui;
use crate::validation::{MenuChoice, parse_menu_choice, parse_player_name, parse_yes_no};
use std::io::{BufRead, Write};

/// Runs the menu loop until the player picks Exit.
///
/// `name` comes from `--name`; without it the player is asked.
pub fn handle_menu_command(
    config: &Config,
    name: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let ledgers = Ledgers::open(config, err)?;
    let player = match name {
        Some(n) => parse_player_name(&n).map_err(CliError::InvalidInput)?,
        None => prompt_until(out, err, stdin, "Enter your name: ", parse_player_name)?,
    };
    let mut session = Session::new(config, player, ledgers);

    loop {
        write_menu(&mut session, out, err)?;
        let choice = prompt_until(out, err, stdin, "Choose an option: ", parse_menu_choice)?;
        match choice {
            MenuChoice::Play => {
                // a skipped round still gets the question, with nothing to show
                let log = handle_play_command(&mut session, out, err, stdin)?.unwrap_or_default();
                let show = prompt_until(
                    out,
                    err,
                    stdin,
                    "Do you want to view the action history? (yes/no): ",
                    parse_yes_no,
                )?;
                if show {
                    ui::write_banner(
                        out,
                        ui::RULE,
                        &format!("ACTION HISTORY (Playing as \"{}\")", session.player),
                    )?;
                    if !log.is_empty() {
                        writeln!(out, "{}", format_history(&log))?;
                    }
                }
            }
            MenuChoice::Leaderboard => handle_leaderboard_command(
                &session.ledgers.leaderboard,
                Some(session.player.as_str()),
                out,
            )?,
            MenuChoice::ChangeName => {
                session.player =
                    prompt_until(out, err, stdin, "Enter a new player name: ", parse_player_name)?;
                tracing::info!(player = %session.player, "player renamed");
            }
            MenuChoice::Exit => {
                ui::write_banner(out, ui::RULE, "THANKS FOR PLAYING! GOODBYE!")?;
                return Ok(());
            }
            MenuChoice::Achievements => handle_achievements_command(
                &session.ledgers.achievements,
                &session.player,
                out,
            )?,
            MenuChoice::Balance => handle_balance_command(
                &mut session.ledgers.balances,
                &session.player,
                out,
                err,
            )?,
        }
    }
}

fn write_menu(
    session: &mut Session,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let (entry, save_err) = session
        .ledgers
        .balances
        .get_or_create(&session.player)
        .into_parts();
    report_save_error(err, save_err)?;

    let width = ui::WIDE_RULE.len();
    writeln!(out)?;
    writeln!(out, "{}", ui::WIDE_RULE)?;
    writeln!(
        out,
        "{:^width$}",
        format!("WELCOME TO LUCKY 9 GAME (Playing as \"{}\")", session.player)
    )?;
    writeln!(
        out,
        "{:^width$}",
        format!("Current Balance: {}", entry.current_balance)
    )?;
    writeln!(out, "{}", ui::WIDE_RULE)?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.key(), choice.label())?;
    }
    writeln!(out, "{}", ui::WIDE_RULE)?;
    Ok(())
}
