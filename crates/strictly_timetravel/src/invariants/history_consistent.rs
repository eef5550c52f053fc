//! History consistency invariant: entry `k` holds exactly `k` moves.

use super::super::GameSession;
use super::Invariant;

/// Invariant: the history is well-formed and the cursor points into it.
///
/// The seed entry is an empty board with no move. Entry `k` has exactly `k`
/// occupied squares, and sequence numbers strictly increase.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let entries = session.history().entries();

        let Some(seed) = entries.first() else {
            return false;
        };
        if seed.board().occupied_count() != 0 || seed.last_move().is_some() {
            return false;
        }

        let counts_match = entries
            .iter()
            .enumerate()
            .all(|(k, entry)| entry.board().occupied_count() == k);

        let increasing = entries
            .windows(2)
            .all(|w| w[0].sequence_number() < w[1].sequence_number());

        counts_match && increasing && session.cursor() < entries.len()
    }

    fn description() -> &'static str {
        "History entry k holds k moves with increasing sequence numbers"
    }
}
