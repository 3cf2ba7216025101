//! Game state and turn management for tic-tac-toe.

use crate::coordinates::Coordinates;
use crate::error::PlaceError;
use crate::rules;
use crate::types::{Board, BoardView, GameStatus, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A single tic-tac-toe session between two players.
///
/// Owns the board, the two players (X in slot 0, O in slot 1), the index of
/// the player to move and the current [`GameStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Game {
    /// The board.
    board: Board,
    /// Both players, in turn order.
    players: [Player; 2],
    /// Slot of the player to move (0 or 1).
    #[getter(skip)]
    turn: usize,
    /// Game status.
    status: GameStatus,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: [Player::X, Player::O],
            turn: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Returns a printable view of the board.
    pub fn render(&self) -> BoardView<'_> {
        self.board.view()
    }

    /// Checks if the cell at `(row, col)` is on the board and unmarked.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.board.is_empty(row, col)
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Does not change whose turn it is; see [`Game::switch_turn`].
    ///
    /// # Errors
    ///
    /// - [`PlaceError::OutOfBounds`] if row or column is off the board.
    /// - [`PlaceError::CellOccupied`] if the cell already holds a mark.
    ///
    /// The board is untouched on error.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn place(&mut self, row: usize, col: usize) -> Result<(), PlaceError> {
        if !Board::contains(row, col) {
            return Err(PlaceError::OutOfBounds);
        }
        if !self.is_empty(row, col) {
            return Err(PlaceError::CellOccupied);
        }

        let player = self.current_player();
        self.board.set(row, col, Square::Occupied(player))?;
        debug!(row, col, %player, "Mark placed");
        Ok(())
    }

    /// Returns the owner of the first complete line, if any.
    pub fn check_winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// Returns true when every cell is occupied.
    ///
    /// Only a draw once [`Game::check_winner`] has returned `None`.
    pub fn check_draw(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Hands the move to the other player.
    pub fn switch_turn(&mut self) {
        self.turn = 1 - self.turn;
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.players[self.turn]
    }

    /// Returns the slot (0 or 1) of the player to move.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Plays one move for the current player and advances the game.
    ///
    /// On success the new status is returned: `Won` if the move completed a
    /// line, `Draw` if it filled the board, otherwise `InProgress` with the
    /// turn passed to the opponent. On error nothing changes and the same
    /// player is still to move.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::GameOver`] if the game already ended.
    /// - [`PlaceError::OutOfBounds`] or [`PlaceError::CellOccupied`] from
    ///   [`Game::place`].
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn play(&mut self, at: Coordinates) -> Result<GameStatus, PlaceError> {
        if self.status.is_terminal() {
            return Err(PlaceError::GameOver);
        }

        let (row, col) = at.cell().ok_or(PlaceError::OutOfBounds)?;
        self.place(row, col)?;

        self.status = if let Some(winner) = self.check_winner() {
            info!(%winner, "Game won");
            GameStatus::Won(winner)
        } else if self.check_draw() {
            info!("Game drawn");
            GameStatus::Draw
        } else {
            self.switch_turn();
            GameStatus::InProgress
        };

        Ok(self.status)
    }

    /// Abandons a game in progress. Finished games keep their result.
    #[instrument(skip(self))]
    pub fn quit(&mut self) {
        if !self.status.is_terminal() {
            info!(player = %self.current_player(), "Game abandoned");
            self.status = GameStatus::Quit;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
