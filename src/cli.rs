//! Command-line interface for the tic-tac-toe front-end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on a single board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a sequence of cell indices (0-8) and print the result
    Moves {
        /// Cell indices in play order; invalid ones are ignored like any other rejected move
        #[arg(allow_negative_numbers = true)]
        indices: Vec<i64>,

        /// Also print the label of every cell
        #[arg(long)]
        labels: bool,

        /// Print the final state as JSON instead of a grid
        #[arg(long)]
        json: bool,
    },
}
