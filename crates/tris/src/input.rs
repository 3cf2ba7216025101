//! Reading coordinates from a line-oriented text stream.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument};
use tris_tictactoe::Coordinates;

/// Prompt written before every read.
pub const PROMPT: &str = "Enter row and column (separated by a space, or q to quit): ";

/// Words that end the session instead of making a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::EnumIter, strum::AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum QuitKeyword {
    /// `q`
    Q,
    /// `quit`
    Quit,
    /// `esci`
    Esci,
    /// `exit`
    Exit,
}

impl QuitKeyword {
    /// Returns true if `entry` (surrounding whitespace ignored) is a quit word.
    pub fn matches(entry: &str) -> bool {
        Self::from_str(entry.trim()).is_ok()
    }
}

/// Prompts until the player enters a coordinate pair or asks to leave.
///
/// Returns `Ok(None)` on a quit keyword or when the input is exhausted.
/// Malformed lines, including bytes that are not UTF-8, are reported on
/// `output` and the prompt is repeated.
/// The coordinates are not checked against the board.
///
/// # Errors
///
/// Only I/O failures on `input` or `output`.
#[instrument(skip_all)]
pub fn read_coordinates<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Coordinates>> {
    let mut line = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            debug!("Input exhausted");
            return Ok(None);
        }

        let text = String::from_utf8_lossy(&line);
        let entry = text.trim();
        if QuitKeyword::matches(entry) {
            debug!(entry, "Quit requested");
            return Ok(None);
        }

        match entry.parse::<Coordinates>() {
            Ok(coordinates) => return Ok(Some(coordinates)),
            Err(e) => {
                debug!(error = %e, entry, "Malformed coordinates");
                writeln!(output, "{}", e)?;
            }
        }
    }
}
