//! Tests for the game session's move and time-travel behavior.

use strictly_timetravel::{
    Board, DisplayOrder, GameSession, GameStatus, HistoryEntry, Player, Position, Square,
};

fn play(session: &mut GameSession, cells: &[usize]) {
    for &cell in cells {
        session.apply_move(cell);
    }
}

fn sequence_numbers(session: &GameSession) -> Vec<usize> {
    session
        .display_list()
        .iter()
        .map(|e| e.sequence_number())
        .collect()
}

#[test]
fn test_initial_state() {
    let session = GameSession::new();
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.current_board(), &Board::new());
    assert_eq!(session.status(), GameStatus::InProgress(Player::X));
    assert_eq!(session.current_entry().last_move(), None);
}

#[test]
fn test_move_k_uses_parity_mark() {
    let mut session = GameSession::new();
    let cells = [4, 0, 2, 6, 3, 5, 1, 7, 8];
    for (k, &cell) in cells.iter().enumerate() {
        if session.status().is_over() {
            break;
        }
        session.apply_move(cell);
        let pos = Position::from_index(cell).expect("valid cell");
        let expected = if k % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(session.current_board().get(pos), Square::Occupied(expected));
        assert_eq!(session.cursor(), k + 1);
    }
}

#[test]
fn test_repeated_move_is_noop() {
    let mut session = GameSession::new();
    session.apply_move(5);
    let history = session.history().clone();
    let cursor = session.cursor();

    session.apply_move(5);
    assert_eq!(session.history(), &history);
    assert_eq!(session.cursor(), cursor);
}

#[test]
fn test_moves_after_win_are_noops() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 4, 1, 3, 2]);
    assert!(matches!(session.status(), GameStatus::Won(_)));

    let before = session.clone();
    for cell in 0..9 {
        session.apply_move(cell);
    }
    assert_eq!(session, before);
}

#[test]
fn test_truncation_length() {
    // N - 1 = 6 moves, so N = 7 entries.
    let moves = [0, 4, 8, 2, 6, 3];
    for k in 0..moves.len() {
        let mut session = GameSession::new();
        play(&mut session, &moves);
        assert_eq!(session.history().len(), 7);

        session.jump_to(k);
        let free = Position::valid_moves(session.current_board())[0];
        session.apply_move(free.to_index());
        assert_eq!(session.history().len(), k + 2, "jump to {k}");
        assert_eq!(session.cursor(), k + 1);
    }
}

#[test]
fn test_jump_discards_later_entries() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 4, 8]);
    let kept: Vec<HistoryEntry> = session.history().entries()[..2].to_vec();

    session.jump_to(1);
    assert_eq!(session.history().entries(), kept.as_slice());

    // Jumping forward is impossible once discarded.
    session.jump_to(3);
    assert_eq!(session.cursor(), 1);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_top_row_wins_over_other_lines() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 3, 1, 4, 2]);
    let line = session.winning_line().expect("winner");
    assert_eq!(line.indices(), [0, 1, 2]);
    assert_eq!(session.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(session.status(), GameStatus::Draw);
}

#[test]
fn test_ninth_move_win_is_not_draw() {
    let mut session = GameSession::new();
    // X O X / O X O / O X X, the last move completes the diagonal
    play(&mut session, &[0, 1, 2, 3, 7, 5, 4, 6, 8]);
    assert_eq!(session.history().len(), 10);
    assert_eq!(session.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_toggle_display_order_invariance() {
    let mut session = GameSession::new();
    play(&mut session, &[4, 0, 8]);
    let cursor = session.cursor();
    let board = session.current_board().clone();
    let len = session.history().len();

    assert_eq!(sequence_numbers(&session), vec![0, 1, 2, 3]);
    session.toggle_display_order();
    assert_eq!(session.display_order(), DisplayOrder::Descending);
    assert_eq!(sequence_numbers(&session), vec![3, 2, 1, 0]);

    assert_eq!(session.cursor(), cursor);
    assert_eq!(session.current_board(), &board);
    assert_eq!(session.history().len(), len);

    // History order itself is untouched.
    let raw: Vec<_> = session
        .history()
        .entries()
        .iter()
        .map(|e| e.sequence_number())
        .collect();
    assert_eq!(raw, vec![0, 1, 2, 3]);
}

#[test]
fn test_descending_order_survives_time_travel() {
    let mut session = GameSession::with_display_order(DisplayOrder::Descending);
    play(&mut session, &[4, 0, 8]);
    session.jump_to(1);
    session.apply_move(2);
    assert_eq!(sequence_numbers(&session), vec![2, 1, 0]);
}

#[test]
fn test_end_to_end_scenario() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 4, 1, 3, 2]);
    assert_eq!(session.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    assert_eq!(session.status(), GameStatus::Won(Player::X));

    session.jump_to(1);
    let board = session.current_board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.occupied_count(), 1);
    assert_eq!(session.cursor(), 1);
    assert_eq!(session.history().len(), 2);

    session.apply_move(4);
    assert_eq!(
        session.current_board().get(Position::Center),
        Square::Occupied(Player::O)
    );
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.current_entry().last_move_coords(), Some((1, 1)));
}

#[test]
fn test_snapshot_serializes() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 4, 1, 3, 2]);
    let json = serde_json::to_value(session.snapshot()).expect("serializable");

    assert_eq!(json["cursor"], 5);
    assert_eq!(json["display_order"], "ascending");
    assert_eq!(json["winning_line"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["status"], serde_json::json!({ "Won": "X" }));
    assert_eq!(json["history"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["history"][0]["description"], "Go to game start");
}
