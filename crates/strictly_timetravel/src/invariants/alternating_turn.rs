//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameSession, Player, Square};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The move that produced entry `k` was made by X when `k` is odd and by
/// O when `k` is even. First move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(k, entry)| match entry.last_move() {
                Some(pos) => entry.board().get(pos) == Square::Occupied(Player::for_turn(k - 1)),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
