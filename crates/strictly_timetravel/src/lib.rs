//! Strictly Timetravel - tic-tac-toe with a rewindable move history
//!
//! The crate is the game core a presentation layer drives: it applies
//! moves, detects wins and draws, and keeps a history of board snapshots
//! that can be rewound.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw detection over a [`Board`]
//! - **Session**: [`GameSession`] owns the [`History`], the cursor into it
//!   and the [`DisplayOrder`] of the history list
//! - **Invariants**: properties of the history checked after every move
//!   in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameSession, GameStatus, Player};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 4, 1, 3, 2] {
//!     session.apply_move(cell);
//! }
//! assert_eq!(session.status(), GameStatus::Won(Player::X));
//! assert_eq!(session.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
//!
//! // Travel back to after the first move; later entries are discarded.
//! session.jump_to(1);
//! session.apply_move(4);
//! assert_eq!(session.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
mod position;
mod session;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use error::MoveError;
pub use history::{DisplayOrder, History, HistoryEntry};
pub use position::Position;
pub use rules::{WinningLine, check_winner, detect_winner, is_draw, is_full};
pub use session::{GameSession, HistoryItem, SessionSnapshot};
pub use status::GameStatus;
pub use types::{Board, Player, Square};

/// Alias for clarity when talking about what sits in a square.
pub type Mark = Player;
