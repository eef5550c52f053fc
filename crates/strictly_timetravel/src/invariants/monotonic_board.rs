//! Monotonic board invariant: each entry extends its predecessor by one mark.

use super::super::{GameSession, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Entry `k` equals entry `k - 1` with exactly its last move filled in.
/// This is verified by replaying each step and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().entries().windows(2).all(|w| {
            let (prev, next) = (&w[0], &w[1]);
            let Some(pos) = next.last_move() else {
                return false;
            };
            let Square::Occupied(player) = next.board().get(pos) else {
                return false;
            };
            // Square must be empty before placing
            prev.board().is_empty(pos) && prev.board().with_mark(pos, player) == *next.board()
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
