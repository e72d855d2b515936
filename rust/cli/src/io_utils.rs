//! Terminal input helpers for the interactive game.
//!
//! Every prompt goes through [`prompt_until`], which re-asks until the answer
//! parses. A closed stdin ends the session with [`CliError::Interrupted`].

use crate::error::CliError;
use crate::ui;
use std::io::{BufRead, Write};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// It trims whitespace from the input and returns `None` on EOF or read errors.
/// Bytes that are not valid UTF-8 are replaced, so a garbled line still comes
/// back as an answer for the caller to reject.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use lucky9_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  hit \n");
/// assert_eq!(read_stdin_line(&mut input), Some("hit".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = Vec::new();
    match stdin.read_until(b'\n', &mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(String::from_utf8_lossy(&line).trim().to_string()),
        Err(_) => None,
    }
}

/// Writes `prompt` without a newline and reads one answer.
pub fn prompt(
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
    prompt: &str,
) -> Result<String, CliError> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    read_stdin_line(stdin).ok_or_else(|| CliError::Interrupted("input closed".into()))
}

/// Asks until `parse` accepts the answer. Rejections are written to `err`.
pub fn prompt_until<T, F>(
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
    text: &str,
    parse: F,
) -> Result<T, CliError>
where
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        let answer = prompt(out, stdin, text)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(msg) => ui::write_error(err, &msg)?,
        }
    }
}
