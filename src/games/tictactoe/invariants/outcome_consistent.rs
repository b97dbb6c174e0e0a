//! Outcome invariant: the recorded status agrees with the board.

use super::super::{GameState, GameStatus, rules};
use super::Invariant;

/// Invariant: status is `Won(p)` exactly when `p` holds a line, `Draw`
/// exactly when the board is full with no line, and `InProgress` otherwise.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            GameStatus::InProgress => {
                rules::check_winner(board).is_none() && !rules::is_full(board)
            }
            GameStatus::Won(player) => rules::check_winner(board) == Some(player),
            GameStatus::Draw => rules::is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board (win, draw or in progress)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(OutcomeConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_unrecorded_win_violates() {
        let board = [Position::TopLeft, Position::TopCenter, Position::TopRight]
            .into_iter()
            .fold(Board::new(), |b, pos| b.with_mark(pos, Player::X));
        let state = GameState::from_parts(board, Player::O, GameStatus::InProgress);
        assert!(!OutcomeConsistentInvariant::holds(&state));

        let state = GameState::from_parts(board, Player::X, GameStatus::Won(Player::X));
        assert!(OutcomeConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_premature_draw_violates() {
        let state = GameState::from_parts(Board::new(), Player::X, GameStatus::Draw);
        assert!(!OutcomeConsistentInvariant::holds(&state));
    }
}
