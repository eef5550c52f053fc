//! Strictly Timetravel - console entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_timetravel::DisplayOrder;
use strictly_timetravel_cli::cli::{Cli, Command};
use strictly_timetravel_cli::{Console, ConsoleConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConsoleConfig::from_file(path)?,
        None => ConsoleConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { descending } => run_play(config, descending),
        Command::Replay { cells, jump, json } => run_replay(config, &cells, jump, json),
    }
}

/// Run the interactive console on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: ConsoleConfig, descending: bool) -> Result<()> {
    let config = if descending {
        config.with_display_order(DisplayOrder::Descending)
    } else {
        config
    };

    info!("Starting interactive game");
    let mut console = Console::new(config);
    let stdin = std::io::stdin();
    console.run(stdin.lock(), std::io::stdout())
}

/// Play a fixed move list and print where it ends up
#[instrument(skip(config))]
fn run_replay(config: ConsoleConfig, cells: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    let mut console = Console::new(config);
    let session = console.session_mut();

    for &cell in cells {
        if let Err(e) = session.try_apply_move(cell) {
            eprintln!("Skipping cell {}: {}", cell, e);
        }
    }
    if let Some(position) = jump {
        session.jump_to(position);
    }

    info!(cursor = session.cursor(), status = %session.status(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        println!("{}", console.render());
    }
    Ok(())
}
