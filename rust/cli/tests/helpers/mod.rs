//! Shared helpers for the CLI integration tests.
//!
//! - `cli_runner`: runs the `lucky9` binary in a scratch directory with piped
//!   stdin and a controlled environment, capturing stdout, stderr and the
//!   exit code.

pub mod cli_runner;
