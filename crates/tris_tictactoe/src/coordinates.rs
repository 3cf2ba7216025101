//! Coordinates as typed by a player.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use std::str::FromStr;
use tracing::instrument;

/// A `(row, col)` pair as entered, not yet checked against the board.
///
/// Values are signed so that `-1 0` parses and is later rejected by the
/// board as out of bounds rather than as malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_more::Display)]
#[display("({}, {})", row, col)]
pub struct Coordinates {
    /// Zero-based row.
    row: i64,
    /// Zero-based column.
    col: i64,
}

impl Coordinates {
    /// Creates a new coordinate pair.
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Converts to board indices, or `None` if either value is negative or
    /// too large for `usize`. Upper bounds are left to the board.
    pub fn cell(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        Some((row, col))
    }
}

impl FromStr for Coordinates {
    type Err = InputError;

    /// Parses two whitespace-separated integers.
    ///
    /// Integers too large for `i64` saturate, so they still reach the board
    /// and are rejected there as out of bounds.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [row, col] = tokens.as_slice() else {
            return Err(InputError::WrongTokenCount(tokens.len()));
        };

        let parse = |token: &str| match token.parse::<i64>() {
            Ok(value) => Ok(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(InputError::NotAnInteger(token.to_string())),
            },
        };

        Ok(Self::new(parse(*row)?, parse(*col)?))
    }
}

/// Malformed coordinate input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// The line did not contain exactly two tokens.
    #[display("Enter exactly two numbers (got {})", _0)]
    WrongTokenCount(usize),

    /// A token was not an integer.
    #[display("Coordinates must be integers, not {:?}", _0)]
    NotAnInteger(String),
}

impl std::error::Error for InputError {}
