//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// Rows top to bottom, then columns left to right, then the
/// top-left diagonal, then the top-right diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three uniformly marked cells that decide the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    positions: [Position; 3],
    player: Player,
}

impl WinningLine {
    /// The positions making up the line, in board order.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// The cell indices making up the line, for highlighting.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }

    /// The player holding the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Whether `pos` is one of the line's cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Finds the first winning line on the board.
///
/// Lines are checked in [`LINES`] order and the first fully,
/// uniformly marked one is returned.
#[instrument]
pub fn detect_winner(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinningLine {
                    positions: [a, b, c],
                    player,
                })
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    detect_winner(board).map(|line| line.player())
}
