//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages, warnings, and banners.

use std::io::Write;

/// Separator printed around hands and menu headers.
pub const RULE: &str = "============================================";

/// Separator framing the main menu.
pub const WIDE_RULE: &str = "==============================================================";

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Write `title` centred between two rules.
pub fn write_banner(out: &mut dyn Write, rule: &str, title: &str) -> std::io::Result<()> {
    writeln!(out, "{}", rule)?;
    writeln!(out, "{:^width$}", title, width = rule.len())?;
    writeln!(out, "{}", rule)
}
