//! Game status derived from a board snapshot.

use super::rules::{detect_winner, is_draw};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the player is next to move.
    InProgress(Player),
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Evaluates `board` with `next` as the player to move.
    ///
    /// A winning line takes precedence over a full board.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board, next: Player) -> Self {
        if let Some(line) = detect_winner(board) {
            GameStatus::Won(line.player())
        } else if is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(next)
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "Next player: {}", player),
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "Draw! Start again"),
        }
    }
}
