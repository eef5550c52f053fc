//! Line-oriented console driving a [`GameSession`].
//!
//! Each input line is one command. State-changing commands print the
//! refreshed board, status and history list.

use crate::config::ConsoleConfig;
use derive_more::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_timetravel::{GameSession, Position, Square};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Command verbs understood by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Verb {
    /// Place a mark: `move <0-8|label>`.
    #[strum(to_string = "move", serialize = "m")]
    Move,
    /// Travel back: `jump <n>`.
    #[strum(to_string = "jump", serialize = "j")]
    Jump,
    /// Flip the history list order.
    #[strum(to_string = "toggle", serialize = "t")]
    Toggle,
    /// Print board and status.
    #[strum(to_string = "show", serialize = "s")]
    Show,
    /// Print the history list.
    #[strum(to_string = "history", serialize = "h")]
    History,
    /// Print the session as JSON.
    Json,
    /// List commands.
    #[strum(to_string = "help", serialize = "?")]
    Help,
    /// Leave the console.
    #[strum(to_string = "quit", serialize = "exit", serialize = "q")]
    Quit,
}

impl Verb {
    /// One-line usage for the help listing.
    pub fn usage(self) -> &'static str {
        match self {
            Verb::Move => "move <0-8|label>  place the next mark",
            Verb::Jump => "jump <n>          go back to entry n, discarding later moves",
            Verb::Toggle => "toggle            flip history order",
            Verb::Show => "show              print board and status",
            Verb::History => "history           print the history list",
            Verb::Json => "json              print the session as JSON",
            Verb::Help => "help              list commands",
            Verb::Quit => "quit              leave",
        }
    }
}

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place the next mark at a position.
    Move(Position),
    /// Jump to a history position.
    Jump(usize),
    /// Flip display order.
    Toggle,
    /// Print board and status.
    Show,
    /// Print the history list.
    History,
    /// Print JSON snapshot.
    Json,
    /// Print help.
    Help,
    /// Stop reading input.
    Quit,
}

/// Input that could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// The line was blank.
    #[display("Empty command")]
    Empty,
    /// The first word is not a known verb.
    #[display("Unknown command '{}', type 'help' for a list", _0)]
    UnknownVerb(String),
    /// The verb needs an argument that was not given.
    #[display("'{}' needs an argument", _0)]
    MissingArgument(Verb),
    /// The argument could not be parsed.
    #[display("Invalid argument '{}'", _0)]
    InvalidArgument(String),
}

impl std::error::Error for CommandError {}

impl FromStr for ConsoleCommand {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let first = words.next().ok_or(CommandError::Empty)?;
        let verb =
            Verb::from_str(first).map_err(|_| CommandError::UnknownVerb(first.to_string()))?;
        let rest = words.collect::<Vec<_>>().join(" ");

        match verb {
            Verb::Move => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument(verb));
                }
                Position::from_label_or_number(&rest)
                    .map(ConsoleCommand::Move)
                    .ok_or(CommandError::InvalidArgument(rest))
            }
            Verb::Jump => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument(verb));
                }
                rest.parse::<usize>()
                    .map(ConsoleCommand::Jump)
                    .map_err(|_| CommandError::InvalidArgument(rest))
            }
            Verb::Toggle => Ok(ConsoleCommand::Toggle),
            Verb::Show => Ok(ConsoleCommand::Show),
            Verb::History => Ok(ConsoleCommand::History),
            Verb::Json => Ok(ConsoleCommand::Json),
            Verb::Help => Ok(ConsoleCommand::Help),
            Verb::Quit => Ok(ConsoleCommand::Quit),
        }
    }
}

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the text and read the next line.
    Continue(String),
    /// Stop.
    Quit,
}

/// Text front end owning one game session.
#[derive(Debug, Clone)]
pub struct Console {
    session: GameSession,
    config: ConsoleConfig,
}

impl Console {
    /// Creates a console with a fresh session.
    #[instrument(skip(config))]
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            session: GameSession::with_display_order(*config.display_order()),
            config,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Mutable access to the session, for scripted play.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Runs one command against the session.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: ConsoleCommand) -> anyhow::Result<Flow> {
        let text = match command {
            ConsoleCommand::Move(pos) => match self.session.try_apply_move(pos.to_index()) {
                Ok(entry) => {
                    debug!(sequence_number = entry.sequence_number(), "Move accepted");
                    self.render()
                }
                Err(e) => format!("Ignored: {}", e),
            },
            ConsoleCommand::Jump(position) => {
                self.session.jump_to(position);
                self.render()
            }
            ConsoleCommand::Toggle => {
                self.session.toggle_display_order();
                self.render_history()
            }
            ConsoleCommand::Show => self.render_board(),
            ConsoleCommand::History => self.render_history(),
            ConsoleCommand::Json => serde_json::to_string_pretty(&self.session.snapshot())?,
            ConsoleCommand::Help => Self::help(),
            ConsoleCommand::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue(text))
    }

    /// Reads commands from `input` until EOF or `quit`, writing replies to `output`.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        info!("Console started");
        writeln!(output, "{}", self.render())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let reply = match line.parse::<ConsoleCommand>() {
                Ok(command) => match self.execute(command)? {
                    Flow::Continue(text) => text,
                    Flow::Quit => break,
                },
                Err(e) => {
                    warn!(input = %line, error = %e, "Unparseable command");
                    e.to_string()
                }
            };
            writeln!(output, "{}", reply)?;
            output.flush()?;
        }

        info!("Console finished");
        Ok(())
    }

    /// Board, status and (if configured) history.
    pub fn render(&self) -> String {
        if *self.config.show_history() {
            format!("{}\n\n{}", self.render_board(), self.render_history())
        } else {
            self.render_board()
        }
    }

    /// The current board with the winning line bracketed, then the status.
    pub fn render_board(&self) -> String {
        let board = self.session.current_board();
        let line = self.session.winning_line();

        let rows: Vec<String> = (0..3)
            .map(|row| {
                (0..3)
                    .filter_map(|col| Position::from_index(row * 3 + col))
                    .map(|pos| {
                        let symbol = match board.get(pos) {
                            Square::Empty => pos.to_index().to_string(),
                            Square::Occupied(player) => player.to_string(),
                        };
                        if line.is_some_and(|l| l.contains(pos)) {
                            format!("[{}]", symbol)
                        } else {
                            format!(" {} ", symbol)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();

        format!("{}\n\n{}", rows.join("\n---+---+---\n"), self.session.status())
    }

    /// The history list in display order, current entry marked.
    pub fn render_history(&self) -> String {
        let mut text = format!("History ({}):", self.session.display_order());
        for entry in self.session.display_list() {
            let is_current = entry.sequence_number() == self.session.cursor();
            let marker = if is_current { '>' } else { ' ' };
            text.push_str(&format!(
                "\n{} {:>2}. {}",
                marker,
                entry.sequence_number(),
                self.session.describe_entry(entry)
            ));
        }
        text
    }

    fn help() -> String {
        let mut text = String::from("Commands:");
        for verb in Verb::iter() {
            text.push_str("\n  ");
            text.push_str(verb.usage());
        }
        text
    }
}
