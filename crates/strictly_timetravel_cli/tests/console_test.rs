//! Tests for the console front end and its config loading.

use std::io::Write;
use strictly_timetravel::{DisplayOrder, GameStatus, Player};
use strictly_timetravel_cli::{Console, ConsoleCommand, ConsoleConfig, Flow};

fn run(console: &mut Console, script: &str) -> String {
    let mut out = Vec::new();
    console.run(script.as_bytes(), &mut out).expect("script runs");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn test_config_file_sets_display_order() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "display_order = \"descending\"\nshow_history = true").expect("write config");

    let config = ConsoleConfig::from_file(file.path()).expect("config loads");
    assert_eq!(config.display_order(), &DisplayOrder::Descending);

    let mut console = Console::new(config);
    let out = run(&mut console, "move 4\nmove 0\n");
    assert!(out.contains("History (descending):\n>  2. You are at move #2"));
    assert_eq!(console.session().display_order(), DisplayOrder::Descending);
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = ConsoleConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_full_game_then_time_travel() {
    let mut console = Console::new(ConsoleConfig::default());
    let out = run(
        &mut console,
        "move 0\nmove 4\nmove 1\nmove 3\nmove 2\nmove 8\njump 1\nmove center\n",
    );

    assert!(out.contains("Winner: X"));
    assert!(out.contains("Ignored: Game is already over, X won"));

    let session = console.session();
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.cursor(), 2);
    assert_eq!(session.status(), GameStatus::InProgress(Player::X));
}

#[test]
fn test_toggle_keeps_board() {
    let mut console = Console::new(ConsoleConfig::default());
    console.execute(ConsoleCommand::Move(strictly_timetravel::Position::Center)).unwrap();
    let before = console.render_board();

    let flow = console.execute(ConsoleCommand::Toggle).unwrap();
    assert!(matches!(flow, Flow::Continue(text) if text.starts_with("History (descending):")));
    assert_eq!(console.render_board(), before);
}

#[test]
fn test_hidden_history() {
    let config = ConsoleConfig::from_toml("show_history = false").expect("valid config");
    let console = Console::new(config);
    assert!(!console.render().contains("History"));
}
