//! Monotonic board invariant: cells never change once set.

use super::super::Cell;
use super::{Invariant, Transition};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Every cell occupied before a transition holds the same mark after it.
pub struct MonotonicBoardInvariant;

impl<'a> Invariant<Transition<'a>> for MonotonicBoardInvariant {
    fn holds(t: &Transition<'a>) -> bool {
        t.before
            .board()
            .cells()
            .iter()
            .zip(t.after.board().cells())
            .all(|(before, after)| *before == Cell::Empty || before == after)
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameState, GameStatus, Player, Position};

    fn state(board: Board, to_move: Player) -> GameState {
        GameState::from_parts(board, to_move, GameStatus::InProgress)
    }

    #[test]
    fn test_placing_on_empty_holds() {
        let before = GameState::new();
        let after = state(Board::new().with_mark(Position::Center, Player::X), Player::O);
        assert!(MonotonicBoardInvariant::holds(&Transition {
            before: &before,
            after: &after,
        }));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let before = state(Board::new().with_mark(Position::Center, Player::X), Player::O);
        let after = state(Board::new().with_mark(Position::Center, Player::O), Player::X);
        assert!(!MonotonicBoardInvariant::holds(&Transition {
            before: &before,
            after: &after,
        }));
    }

    #[test]
    fn test_cleared_cell_violates() {
        let before = state(Board::new().with_mark(Position::TopLeft, Player::X), Player::O);
        let after = GameState::new();
        assert!(!MonotonicBoardInvariant::holds(&Transition {
            before: &before,
            after: &after,
        }));
    }
}
