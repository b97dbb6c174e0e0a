//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.

use super::action::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants, Transition};
use super::{GameState, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game must not be won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] on a terminal state.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.game_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] if the cell holds a mark.
    #[instrument(skip(state))]
    pub fn check(position: Position, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Contract for placing the current player's mark.
///
/// Preconditions, checked in order:
/// - Game is not over
/// - Cell is empty
///
/// Postconditions:
/// - Board remains monotonic
/// - Status agrees with the board
/// - Turn parity holds
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, position: &Position) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        CellIsEmpty::check(*position, state)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        TicTacToeInvariants::check_all(&Transition { before, after }).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
