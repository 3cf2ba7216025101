//! Win detection logic for tic-tac-toe.

use crate::types::{BOARD_SIZE, Board, Player, Square};
use tracing::instrument;

/// Cells making up one row, column or diagonal, as `(row, col)` pairs.
pub type Line = [(usize, usize); BOARD_SIZE];

/// Enumerates every line on the board.
///
/// Order is all rows top to bottom, all columns left to right, the main
/// diagonal, then the anti-diagonal: `2 * SIZE + 2` lines in total.
pub fn lines() -> impl Iterator<Item = Line> {
    const N: usize = Board::SIZE;

    fn line(cell: impl FnMut(usize) -> (usize, usize)) -> Line {
        std::array::from_fn(cell)
    }

    let rows = (0..N).map(|r| line(|c| (r, c)));
    let cols = (0..N).map(|c| line(|r| (r, c)));
    let main = std::iter::once(line(|i| (i, i)));
    let anti = std::iter::once(line(|i| (i, N - 1 - i)));

    rows.chain(cols).chain(main).chain(anti)
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first line (in [`lines`] order) whose cells all
/// hold the same mark, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    lines().find_map(|line| {
        let [(r0, c0), rest @ ..] = line;
        let first = board.get(r0, c0)?;
        match first {
            Square::Occupied(player) if rest.iter().all(|&(r, c)| board.get(r, c) == Some(first)) => {
                Some(player)
            }
            _ => None,
        }
    })
}
