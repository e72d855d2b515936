//! Command handler modules for the Lucky 9 CLI.
//!
//! Each command lives in its own module and follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<_, CliError>`
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed in
//! - Errors propagated via the `CliError` enum

pub mod achievements;
pub mod balance;
pub mod cfg;
pub mod leaderboard;
pub mod menu;
pub mod play;

pub use achievements::handle_achievements_command;
pub use balance::handle_balance_command;
pub use cfg::handle_cfg_command;
pub use leaderboard::handle_leaderboard_command;
pub use menu::handle_menu_command;
pub use play::handle_play_command;
