//! Turn parity invariant: X moves first and players alternate.

use super::super::{GameState, GameStatus, Player};
use super::Invariant;

/// Invariant: mark counts agree with whose turn it is.
///
/// X always moves first, so X has either as many marks as O (X to move)
/// or exactly one more (O to move). A finished game keeps the turn on the
/// player who made the last move.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);

        let next = if x == o {
            Player::X
        } else if x == o + 1 {
            Player::O
        } else {
            return false;
        };

        match state.status() {
            GameStatus::InProgress => state.current_player() == next,
            GameStatus::Won(winner) => {
                x + o > 0 && winner == next.opponent() && state.current_player() == winner
            }
            GameStatus::Draw => x + o > 0 && state.current_player() == next.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(TurnParityInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_o_to_move_after_x() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        let ok = GameState::from_parts(board, Player::O, GameStatus::InProgress);
        let bad = GameState::from_parts(board, Player::X, GameStatus::InProgress);
        assert!(TurnParityInvariant::holds(&ok));
        assert!(!TurnParityInvariant::holds(&bad));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::X);
        let state = GameState::from_parts(board, Player::O, GameStatus::InProgress);
        assert!(!TurnParityInvariant::holds(&state));
    }

    #[test]
    fn test_winner_keeps_the_turn() {
        let board = [
            (Position::TopLeft, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::TopCenter, Player::X),
            (Position::Center, Player::O),
            (Position::TopRight, Player::X),
        ]
        .into_iter()
        .fold(Board::new(), |b, (pos, p)| b.with_mark(pos, p));
        let state = GameState::from_parts(board, Player::X, GameStatus::Won(Player::X));
        assert!(TurnParityInvariant::holds(&state));
    }
}
