//! Achievement listing for the current player.

use crate::error::CliError;
use crate::formatters::format_achievements;
use crate::ui;
use lucky9_engine::achievements::Achievements;
use std::io::Write;

pub fn handle_achievements_command(
    achievements: &Achievements,
    player: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(out)?;
    ui::write_banner(
        out,
        ui::RULE,
        &format!("ACHIEVEMENTS (Playing as \"{}\")", player),
    )?;
    writeln!(out, "{}", format_achievements(&achievements.for_player(player)))?;
    writeln!(out, "{}", ui::RULE)?;
    Ok(())
}
