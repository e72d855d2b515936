//! # Lucky 9 CLI Library
//!
//! Terminal front end for the Lucky 9 card game. The player bets against the
//! banker from an interactive menu; balances, the leaderboard and achievements
//! persist as JSON files in the data directory.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, resolves configuration and executes the
//! chosen subcommand against the process's stdin. [`run_with_input`] does the
//! same with any [`BufRead`] as input.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["lucky9", "--name", "Alice"];
//! let code = lucky9_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play` (default): open the interactive menu
//! - `cfg`: display the resolved configuration
//! - `leaderboard`: print the leaderboard and exit

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod session;
pub mod ui;
pub mod validation;

use cli::{Commands, Lucky9Cli};
use commands::{handle_cfg_command, handle_leaderboard_command, handle_menu_command};
use config::ConfigResolved;
use session::Ledgers;

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Installs logging from the resolved configuration, then runs the command
/// with the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when stdin closes while
/// the game is waiting for input
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (cli, resolved) = match prepare(args, out, err) {
        Ok(parts) => parts,
        Err(code) => return code,
    };
    logging::init_logging(&resolved.config.log_level);
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    dispatch(cli, &resolved, out, err, &mut stdin_lock)
}

/// Like [`run`], reading answers from `stdin` and leaving logging alone.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// let dir = std::env::temp_dir().join("lucky9-doc-run");
/// let dir = dir.to_string_lossy().to_string();
/// let mut stdin = Cursor::new("4\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = lucky9_cli::run_with_input(
///     ["lucky9", "--name", "Alice", "--data-dir", dir.as_str()],
///     &mut stdin,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match prepare(args, out, err) {
        Ok((cli, resolved)) => dispatch(cli, &resolved, out, err, stdin),
        Err(code) => code,
    }
}

/// Parses arguments and resolves configuration, or returns the exit code to
/// stop with.
fn prepare<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(Lucky9Cli, ConfigResolved), i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match Lucky9Cli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and exit 0
            return Err(match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        exit_code::ERROR
                    } else {
                        exit_code::SUCCESS
                    }
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            });
        }
    };

    let mut resolved = match config::load_with_sources() {
        Ok(resolved) => resolved,
        Err(e) => {
            let _ = ui::write_error(err, &CliError::from(e).to_string());
            return Err(exit_code::ERROR);
        }
    };
    resolved.apply_cli(cli.data_dir.as_deref(), cli.seed);
    Ok((cli, resolved))
}

fn dispatch(
    cli: Lucky9Cli,
    resolved: &ConfigResolved,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32 {
    let result = match cli.cmd.unwrap_or(Commands::Play) {
        Commands::Play => handle_menu_command(&resolved.config, cli.name, out, err, stdin),
        Commands::Cfg => handle_cfg_command(resolved, out),
        Commands::Leaderboard => Ledgers::open(&resolved.config, err)
            .and_then(|ledgers| handle_leaderboard_command(&ledgers.leaderboard, None, out)),
    };
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            tracing::debug!(reason = %msg, "session interrupted");
            write_or_exit!(err, "\nInterrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
