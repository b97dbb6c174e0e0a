//! Tic-tac-toe - command line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_frontend::{GameEngine, TuiConfig, tui};
use tracing::{debug, info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(config),
        Command::Moves {
            indices,
            labels,
            json,
        } => run_moves(&config, &indices, labels, json),
    }
}

/// Apply a move sequence non-interactively and print the outcome.
#[instrument(skip(config))]
fn run_moves(config: &TuiConfig, indices: &[i64], labels: bool, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .init();
    debug!(config = ?config, "Configuration in effect");

    let mut engine = GameEngine::new();
    for &index in indices {
        engine.apply_move(index);
    }
    info!(moves = indices.len(), status = ?engine.status(), "Sequence applied");

    if json {
        println!("{}", serde_json::to_string_pretty(engine.state())?);
        return Ok(());
    }

    println!("{}", engine.board().display());
    println!();
    match engine.winner() {
        Some(winner) => println!("Player {} wins!", winner),
        None if engine.is_draw() => println!("It's a draw!"),
        None => println!("Player {}'s turn", engine.current_player()),
    }

    if labels {
        println!();
        for index in 0..9 {
            println!("{}", engine.cell_label(index));
        }
    }

    Ok(())
}
