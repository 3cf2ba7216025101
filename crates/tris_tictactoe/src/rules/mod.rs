//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from board
//! storage so they can be checked without a running game.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner, lines};
