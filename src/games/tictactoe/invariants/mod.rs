//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and checked by the move contract in
//! debug builds.

use super::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S: ?Sized> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    S: ?Sized,
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    S: ?Sized,
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        collect(violations)
    }
}

/// A state change, observed from both ends.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// State before the change.
    pub before: &'a GameState,
    /// State after the change.
    pub after: &'a GameState,
}

pub mod monotonic_board;
pub mod outcome_consistent;
pub mod turn_parity;

pub use monotonic_board::MonotonicBoardInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use turn_parity::TurnParityInvariant;

/// Invariants over a single state snapshot.
pub type StateInvariants = (OutcomeConsistentInvariant, TurnParityInvariant);

impl<'a> Invariant<Transition<'a>> for OutcomeConsistentInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        <Self as Invariant<GameState>>::holds(t.after)
    }

    fn description() -> &'static str {
        <Self as Invariant<GameState>>::description()
    }
}

impl<'a> Invariant<Transition<'a>> for TurnParityInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        <Self as Invariant<GameState>>::holds(t.after)
    }

    fn description() -> &'static str {
        <Self as Invariant<GameState>>::description()
    }
}

/// All tic-tac-toe invariants checked across a move.
pub type TicTacToeInvariants = (
    MonotonicBoardInvariant,
    OutcomeConsistentInvariant,
    TurnParityInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameStatus, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let state = GameState::new();
        assert!(StateInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Claims X won on an empty board with O to move.
        let state = GameState::from_parts(Board::new(), Player::O, GameStatus::Won(Player::X));
        let violations = StateInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_transition_set_holds_for_legal_move() {
        let before = GameState::new();
        let after = GameState::from_parts(
            Board::new().with_mark(Position::Center, Player::X),
            Player::O,
            GameStatus::InProgress,
        );
        let t = Transition {
            before: &before,
            after: &after,
        };
        assert!(TicTacToeInvariants::check_all(&t).is_ok());
    }
}
