//! Tris - command-line tic-tac-toe for two players.
//!
//! Bridges a line-oriented text stream to [`tris_tictactoe::Game`]. The loop
//! is generic over [`std::io::BufRead`] and [`std::io::Write`], so the binary
//! runs it on stdin/stdout and tests run it on in-memory buffers.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tris_tictactoe::{GameStatus, Player};
//!
//! let moves = "0 0\n1 1\n0 1\n1 0\n0 2\n";
//! let mut screen = Vec::new();
//! let status = tris::run(Cursor::new(moves), &mut screen).unwrap();
//! assert_eq!(status, GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod input;
mod session;

pub use cli::Cli;
pub use input::{PROMPT, QuitKeyword, read_coordinates};
pub use session::run;
