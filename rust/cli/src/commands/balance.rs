//! Balance view for the current player.

use crate::error::CliError;
use crate::formatters::format_balance;
use crate::session::report_save_error;
use lucky9_engine::balances::Balances;
use std::io::Write;

/// Shows the player's balance, creating the entry first if it is new.
pub fn handle_balance_command(
    balances: &mut Balances,
    player: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let (entry, save_err) = balances.get_or_create(player).into_parts();
    report_save_error(err, save_err)?;
    writeln!(out, "{}", format_balance(player, &entry))?;
    Ok(())
}
