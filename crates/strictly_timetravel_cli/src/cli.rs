//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};

/// Strictly Timetravel - tic-tac-toe with a rewindable history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Play tic-tac-toe and travel back through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play {
        /// Start with the history list in descending order
        #[arg(long)]
        descending: bool,
    },

    /// Apply a fixed list of moves and print the final state
    Replay {
        /// Cell indices (0-8) in the order they are played
        #[arg(required = true)]
        cells: Vec<usize>,

        /// Jump to this history position after the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from(["strictly_timetravel", "replay", "0", "4", "1", "--jump", "1"]);
        match cli.command {
            Command::Replay { cells, jump, json } => {
                assert_eq!(cells, vec![0, 4, 1]);
                assert_eq!(jump, Some(1));
                assert!(!json);
            }
            Command::Play { .. } => panic!("expected replay"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["strictly_timetravel", "play", "--config", "game.toml"]);
        assert_eq!(cli.config, Some(std::path::PathBuf::from("game.toml")));
        assert!(matches!(cli.command, Command::Play { descending: false }));
    }

    #[test]
    fn test_replay_requires_cells() {
        assert!(Cli::try_parse_from(["strictly_timetravel", "replay"]).is_err());
    }
}
