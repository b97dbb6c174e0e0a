//! Property tests over arbitrary move sequences.

use proptest::prelude::*;
use std::sync::Arc;
use tictactoe_frontend::{
    Cell, GameEngine, GameState, GameStatus, InvariantSet, Player, StateInvariants, rules,
};

fn moves() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-3i64..12, 0..30)
}

proptest! {
    #[test]
    fn occupied_cells_never_change(seq in moves()) {
        let mut engine = GameEngine::new();
        for index in seq {
            let before = *engine.board();
            engine.apply_move(index);
            for (old, new) in before.cells().iter().zip(engine.board().cells()) {
                if *old != Cell::Empty {
                    prop_assert_eq!(old, new);
                }
            }
        }
    }

    #[test]
    fn player_toggles_only_on_accepted_moves(seq in moves()) {
        let mut engine = GameEngine::new();
        for index in seq {
            let before = engine.snapshot();
            engine.apply_move(index);
            let after = engine.snapshot();

            if Arc::ptr_eq(&before, &after) {
                prop_assert_eq!(&*before, &*after);
            } else if after.status() == GameStatus::InProgress {
                prop_assert_eq!(after.current_player(), before.current_player().opponent());
            } else {
                prop_assert_eq!(after.current_player(), before.current_player());
            }
        }
    }

    #[test]
    fn reset_always_restores_initial_state(seq in moves()) {
        let mut engine = GameEngine::new();
        for index in seq {
            engine.apply_move(index);
        }
        engine.reset();
        prop_assert_eq!(engine.state(), &GameState::new());
    }

    #[test]
    fn terminal_states_are_frozen(seq in moves(), extra in moves()) {
        let mut engine = GameEngine::new();
        for index in seq {
            engine.apply_move(index);
        }
        if engine.game_over() {
            let frozen = engine.snapshot();
            for index in extra {
                engine.apply_move(index);
            }
            prop_assert!(Arc::ptr_eq(&frozen, &engine.snapshot()));
        }
    }

    #[test]
    fn status_always_agrees_with_board(seq in moves()) {
        let mut engine = GameEngine::new();
        for index in seq {
            engine.apply_move(index);
            prop_assert!(StateInvariants::check_all(engine.state()).is_ok());
            match engine.status() {
                GameStatus::Won(p) => {
                    prop_assert_eq!(rules::check_winner(engine.board()), Some(p));
                    prop_assert!(!engine.is_draw());
                }
                GameStatus::Draw => {
                    prop_assert!(rules::is_full(engine.board()));
                    prop_assert_eq!(engine.winner(), None);
                }
                GameStatus::InProgress => prop_assert!(!engine.game_over()),
            }
        }
    }
}

#[test]
fn x_always_moves_first() {
    let mut engine = GameEngine::new();
    engine.apply_move(7);
    assert_eq!(engine.board().count(Player::X), 1);
    assert_eq!(engine.board().count(Player::O), 0);
}
