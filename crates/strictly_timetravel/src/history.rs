//! Board history with time-travel truncation.
//!
//! The history is an ordered list of board snapshots. Position `k` holds the
//! board after `k` moves. Each entry also carries a sequence number that is
//! fixed when the entry is created. Display ordering sorts by that number,
//! never by position.

use super::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One board snapshot in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    sequence_number: usize,
    board: Board,
    last_move: Option<Position>,
}

impl HistoryEntry {
    /// The seed entry: empty board, sequence number 0, no move.
    pub fn seed() -> Self {
        Self {
            sequence_number: 0,
            board: Board::new(),
            last_move: None,
        }
    }

    /// Stable identity assigned at creation.
    pub fn sequence_number(&self) -> usize {
        self.sequence_number
    }

    /// The board after this entry's move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this entry, `None` for the seed.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Zero-based `(row, col)` of the move that produced this entry.
    pub fn last_move_coords(&self) -> Option<(usize, usize)> {
        self.last_move.map(Position::coords)
    }

    /// Label for this entry in a history list.
    ///
    /// Rows and columns are shown 1-based. `is_current` marks the entry the
    /// cursor sits on, which reads as a location rather than a jump target.
    pub fn description(&self, is_current: bool) -> String {
        match (self.last_move, is_current) {
            (None, false) => "Go to game start".to_string(),
            (None, true) => "You are at game start".to_string(),
            (Some(pos), false) => format!(
                "Go to move #{} (row: {} col: {})",
                self.sequence_number,
                pos.row() + 1,
                pos.col() + 1
            ),
            (Some(pos), true) => format!(
                "You are at move #{} (row: {} col: {})",
                self.sequence_number,
                pos.row() + 1,
                pos.col() + 1
            ),
        }
    }
}

/// Presentation order of the history list.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DisplayOrder {
    /// Oldest entry first.
    #[default]
    #[display("ascending")]
    Ascending,
    /// Newest entry first.
    #[display("descending")]
    Descending,
}

impl DisplayOrder {
    /// Returns the other order.
    pub fn toggled(self) -> Self {
        match self {
            DisplayOrder::Ascending => DisplayOrder::Descending,
            DisplayOrder::Descending => DisplayOrder::Ascending,
        }
    }
}

/// Ordered board snapshots, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the seed entry.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::seed()],
        }
    }

    /// Number of entries. Always at least 1.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the seed entry is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `position`, if it exists.
    pub fn get(&self, position: usize) -> Option<&HistoryEntry> {
        self.entries.get(position)
    }

    /// The newest entry.
    pub fn last(&self) -> &HistoryEntry {
        // The seed entry guarantees a last element.
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in history order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Appends a board produced by `last_move`.
    ///
    /// The new entry's sequence number is the history length before the push.
    #[instrument(skip(self, board))]
    pub fn push(&mut self, board: Board, last_move: Position) -> &HistoryEntry {
        let sequence_number = self.entries.len();
        debug!(sequence_number, "Appending history entry");
        self.entries.push(HistoryEntry {
            sequence_number,
            board,
            last_move: Some(last_move),
        });
        self.last()
    }

    /// Keeps entries `0..=position` and discards the rest.
    ///
    /// `position` is clamped to the last index, so the seed entry survives.
    /// Returns the position actually kept.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn truncate_to(&mut self, position: usize) -> usize {
        let kept = position.min(self.entries.len() - 1);
        let discarded = self.entries.len() - 1 - kept;
        self.entries.truncate(kept + 1);
        debug!(kept, discarded, "Truncated history");
        kept
    }

    /// Entries sorted by sequence number in `order`.
    pub fn sorted(&self, order: DisplayOrder) -> Vec<&HistoryEntry> {
        let mut list: Vec<&HistoryEntry> = self.entries.iter().collect();
        match order {
            DisplayOrder::Ascending => list.sort_by_key(|e| e.sequence_number),
            DisplayOrder::Descending => {
                list.sort_by_key(|e| std::cmp::Reverse(e.sequence_number))
            }
        }
        list
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
