//! Core domain types for tic-tac-toe.

use crate::error::PlaceError;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game, identified by its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the single-character symbol this player marks cells with.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character drawn for this square; a space when empty.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

/// Square tic-tac-toe grid, addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Number of rows (and columns).
    pub const SIZE: usize = BOARD_SIZE;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Returns true if `(row, col)` lies on the board.
    pub fn contains(row: usize, col: usize) -> bool {
        row < Self::SIZE && col < Self::SIZE
    }

    /// Gets the square at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.squares.get(row)?.get(col).copied()
    }

    /// Sets the square at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfBounds`] when the cell is off the board.
    pub fn set(&mut self, row: usize, col: usize, square: Square) -> Result<(), PlaceError> {
        let cell = self
            .squares
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(PlaceError::OutOfBounds)?;
        *cell = square;
        Ok(())
    }

    /// Checks if a square is empty. Off-board cells are never empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Returns all squares, row by row.
    pub fn squares(&self) -> &[[Square; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Returns a lazy, printable view of the board.
    pub fn view(&self) -> BoardView<'_> {
        BoardView { board: self }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text rendering of a [`Board`].
///
/// Nothing is formatted until the view is displayed, so one view can be
/// printed any number of times.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
}

impl std::fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = "-".repeat(Board::SIZE * 4 - 1);
        for (r, row) in self.board.squares.iter().enumerate() {
            if r > 0 {
                write!(f, "\n{}\n", separator)?;
            }
            for (c, square) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" | ")?;
                }
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
    /// A player left before the game resolved.
    Quit,
}

impl GameStatus {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
