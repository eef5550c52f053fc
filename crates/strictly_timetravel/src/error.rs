//! Reasons a move is ignored.

use super::{Player, Position};

/// Why a move was not applied.
///
/// The session treats every one of these as a no-op; the error only
/// explains what was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside the board.
    #[display("Cell {} is outside the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current board already has a winner.
    #[display("Game is already over, {} won", _0)]
    GameOver(Player),
}

impl std::error::Error for MoveError {}
