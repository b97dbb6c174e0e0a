//! Tic-tac-toe engine with a terminal front-end.
//!
//! The core is [`GameEngine`]: it owns the board, alternates turns, detects
//! wins and draws, and locks the board once the game is over. Every accepted
//! move or reset publishes a new immutable [`GameState`] snapshot, so a view
//! layer can re-render by comparing snapshot pointers.
//!
//! # Example
//!
//! ```
//! use tictactoe_frontend::{GameEngine, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(engine.winner(), Some(Player::X));
//! assert_eq!(engine.cell_label(4), "Row 2, Column 2, O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
pub mod tui;

pub use config::{ConfigError, TuiConfig};

pub use games::tictactoe::{
    Board, Cell, CellIsEmpty, Contract, GameEngine, GameNotOver, GameState, GameStatus,
    Invariant, InvariantSet, InvariantViolation, MonotonicBoardInvariant, Move, MoveContract,
    MoveError, OutcomeConsistentInvariant, Player, Position, StateInvariants,
    TicTacToeInvariants, Transition, TurnParityInvariant, rules,
};
