//! Errors raised while placing a mark.

/// Why a placement was refused. The board is never modified when one of
/// these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PlaceError {
    /// Row or column lies outside the board.
    #[display("Coordinates are outside the board")]
    OutOfBounds,

    /// The target cell already holds a mark.
    #[display("Cell is already occupied")]
    CellOccupied,

    /// The game has already been won, drawn or abandoned.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for PlaceError {}
