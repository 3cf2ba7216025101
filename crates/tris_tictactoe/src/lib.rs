//! Pure tic-tac-toe game state.
//!
//! Board representation, move validation, win and draw detection and turn
//! management for a two-player game on a 3x3 grid. No I/O happens here; a
//! front end feeds [`Coordinates`] into [`Game::play`] and renders
//! [`Game::render`].
//!
//! # Example
//!
//! ```
//! use tris_tictactoe::{Coordinates, Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     game.play(Coordinates::new(row, col)).unwrap();
//! }
//! assert_eq!(game.play(Coordinates::new(0, 2)), Ok(GameStatus::Won(Player::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coordinates;
mod error;
mod game;
pub mod rules;
mod types;

pub use coordinates::{Coordinates, InputError};
pub use error::PlaceError;
pub use game::Game;
pub use types::{BOARD_SIZE, Board, BoardView, GameStatus, Player, Square};
