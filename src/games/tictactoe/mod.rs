//! Tic-tac-toe: domain types, rules and the game engine.

mod action;
mod contracts;
mod engine;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, MoveContract};
pub use engine::GameEngine;
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MonotonicBoardInvariant,
    OutcomeConsistentInvariant, StateInvariants, TicTacToeInvariants, Transition,
    TurnParityInvariant,
};
pub use position::Position;
pub use types::{Board, Cell, GameState, GameStatus, Player};
