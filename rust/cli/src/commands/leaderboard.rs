//! Leaderboard view, from the menu or the `leaderboard` subcommand.

use crate::error::CliError;
use crate::formatters::format_leaderboard;
use crate::ui;
use lucky9_engine::leaderboard::Leaderboard;
use std::io::Write;

/// Prints the standings. With `player` set, a header naming the current
/// player comes first.
pub fn handle_leaderboard_command(
    leaderboard: &Leaderboard,
    player: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if let Some(name) = player {
        writeln!(out)?;
        ui::write_banner(
            out,
            ui::RULE,
            &format!("CURRENT LEADERBOARD (Playing as \"{}\")", name),
        )?;
    }
    writeln!(out, "{}", format_leaderboard(&leaderboard.standings()))?;
    Ok(())
}
