//! Game session: history, cursor and display order.
//!
//! The session is the only stateful piece of the crate. The cursor selects
//! the current board, and the player to move is derived from cursor parity
//! rather than stored.

use super::error::MoveError;
use super::history::{DisplayOrder, History, HistoryEntry};
#[cfg(debug_assertions)]
use super::invariants::{InvariantSet, SessionInvariants};
use super::rules::{WinningLine, detect_winner};
use super::status::GameStatus;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A single game with time-travel history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: History,
    cursor: usize,
    display_order: DisplayOrder,
}

impl GameSession {
    /// Creates a session at the empty board with ascending display order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_display_order(DisplayOrder::default())
    }

    /// Creates a session at the empty board with the given display order.
    #[instrument]
    pub fn with_display_order(display_order: DisplayOrder) -> Self {
        info!(%display_order, "Starting new game session");
        Self {
            history: History::new(),
            cursor: 0,
            display_order,
        }
    }

    /// Places the active player's mark at `cell_index`.
    ///
    /// Ignored without any effect when the index is off the board, the
    /// square is taken, or the current board is already won.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn apply_move(&mut self, cell_index: usize) {
        if let Err(e) = self.try_apply_move(cell_index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Places the active player's mark at `cell_index`, reporting rejections.
    ///
    /// On success the new entry is appended and the cursor moves onto it.
    /// On error the session is unchanged.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `cell_index >= 9`
    /// - [`MoveError::GameOver`] if the current board has a winning line
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn try_apply_move(&mut self, cell_index: usize) -> Result<&HistoryEntry, MoveError> {
        let pos = Position::from_index(cell_index).ok_or(MoveError::OutOfBounds(cell_index))?;

        let current = self.current_board();
        if let Some(line) = detect_winner(current) {
            return Err(MoveError::GameOver(line.player()));
        }
        if !current.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let next = current.with_mark(pos, player);

        // Moves always extend the entry under the cursor.
        self.history.truncate_to(self.cursor);
        self.history.push(next, pos);
        self.cursor = self.history.len() - 1;
        info!(%player, position = %pos, cursor = self.cursor, "Move applied");

        #[cfg(debug_assertions)]
        self.check_invariants();

        Ok(self.history.last())
    }

    /// Travels back to `position`, discarding every later entry.
    ///
    /// Positions past the end are clamped to the last entry.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, position: usize) {
        let last = self.history.len() - 1;
        if position > last {
            warn!(position, last, "Jump target out of range, clamping");
        }
        self.cursor = self.history.truncate_to(position);
        info!(cursor = self.cursor, "Jumped in history");
    }

    /// Flips the history list between ascending and descending order.
    #[instrument(skip(self))]
    pub fn toggle_display_order(&mut self) {
        self.display_order = self.display_order.toggled();
        debug!(display_order = %self.display_order, "Display order toggled");
    }

    /// Status of the current board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_board(), self.next_player())
    }

    /// History sorted by sequence number in the current display order.
    pub fn display_list(&self) -> Vec<&HistoryEntry> {
        self.history.sorted(self.display_order)
    }

    /// The board under the cursor.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// The history entry under the cursor.
    pub fn current_entry(&self) -> &HistoryEntry {
        // Every mutation keeps the cursor inside the history.
        &self.history.entries()[self.cursor]
    }

    /// The winning line on the current board, for highlighting.
    pub fn winning_line(&self) -> Option<WinningLine> {
        detect_winner(self.current_board())
    }

    /// Index of the current entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current display order.
    pub fn display_order(&self) -> DisplayOrder {
        self.display_order
    }

    /// The underlying history, in history order.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Player to move at the cursor: X on even positions, O on odd.
    pub fn next_player(&self) -> Player {
        Player::for_turn(self.cursor)
    }

    /// Label for `entry` in the history list.
    pub fn describe_entry(&self, entry: &HistoryEntry) -> String {
        let is_current = entry.sequence_number() == self.current_entry().sequence_number();
        entry.description(is_current)
    }

    /// Structured view of the session for presentation layers.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status(),
            cursor: self.cursor,
            display_order: self.display_order,
            board: self.current_board().clone(),
            winning_line: self.winning_line().map(|line| line.indices()),
            history: self
                .display_list()
                .into_iter()
                .map(|entry| HistoryItem {
                    sequence_number: entry.sequence_number(),
                    last_move: entry.last_move_coords(),
                    description: self.describe_entry(entry),
                    is_current: entry.sequence_number()
                        == self.current_entry().sequence_number(),
                })
                .collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_history(history: History) -> Self {
        let cursor = history.len() - 1;
        Self {
            history,
            cursor,
            display_order: DisplayOrder::default(),
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        if let Err(violations) = SessionInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Session invariant violated");
            }
            debug_assert!(violations.is_empty(), "Session invariants violated");
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// One line of the history list in a [`SessionSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Stable identity of the entry.
    pub sequence_number: usize,
    /// Zero-based `(row, col)` of the move, `None` for the game start.
    pub last_move: Option<(usize, usize)>,
    /// Human-readable label.
    pub description: String,
    /// Whether the cursor sits on this entry.
    pub is_current: bool,
}

/// Serializable view of a [`GameSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Status of the current board.
    pub status: GameStatus,
    /// Index of the current entry.
    pub cursor: usize,
    /// Order of `history`.
    pub display_order: DisplayOrder,
    /// The board under the cursor.
    pub board: Board,
    /// Cell indices of the winning line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// History in display order.
    pub history: Vec<HistoryItem>,
}
