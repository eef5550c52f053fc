//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Reports whether the board counts as drawn.
///
/// True iff every square is occupied. This does not look for a winning
/// line: callers must run [`detect_winner`](super::detect_winner) first,
/// since a full board with three in a row is a win.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
}
