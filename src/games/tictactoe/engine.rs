//! Tic-tac-toe game engine.
//!
//! The engine owns one [`GameState`] behind an [`Arc`]. Every accepted move
//! and every reset installs a fresh snapshot, so a view layer can detect a
//! change by comparing snapshot pointers with [`Arc::ptr_eq`]. Rejected moves
//! leave the snapshot (and its pointer) untouched.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::{Board, GameState, GameStatus, Player, Position, rules};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: Arc<GameState>,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: Arc::new(GameState::new()),
        }
    }

    /// Starts over: empty board, X to move, no winner, not a draw.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.state = Arc::new(GameState::new());
    }

    /// Places the current player's mark at `index`, if the move is legal.
    ///
    /// Indices outside 0-8 (including negatives), moves after the game ended
    /// and moves onto occupied cells are silently ignored.
    #[instrument(skip(self, index))]
    pub fn apply_move<I: TryInto<usize>>(&mut self, index: I) {
        let result = match Position::try_from_index(index) {
            Some(position) => self.try_move(position),
            None => Err(MoveError::InvalidIndex),
        };

        if let Err(e) = result {
            debug!(reason = %e, "Move ignored");
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// On success returns the move that was made. On error the state is
    /// unchanged.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn try_move(&mut self, position: Position) -> Result<Move, MoveError> {
        MoveContract::pre(self.state(), &position)?;

        let player = self.state.current_player();
        let board = self.state.board().with_mark(position, player);
        let next = Self::evaluate(board, player);

        #[cfg(debug_assertions)]
        MoveContract::post(self.state(), &next)?;

        match next.status() {
            GameStatus::Won(winner) => debug!(%winner, ?position, "Game won"),
            GameStatus::Draw => debug!(?position, "Game drawn"),
            GameStatus::InProgress => debug!(?position, "Move accepted"),
        }

        self.state = Arc::new(next);
        Ok(Move::new(player, position))
    }

    /// Decides the state that follows `player` producing `board`.
    ///
    /// A win stops evaluation without passing the turn; a full board is a
    /// draw; otherwise the turn passes to the opponent.
    fn evaluate(board: Board, player: Player) -> GameState {
        if let Some(winner) = rules::check_winner(&board) {
            GameState::from_parts(board, player, GameStatus::Won(winner))
        } else if rules::is_full(&board) {
            GameState::from_parts(board, player, GameStatus::Draw)
        } else {
            GameState::from_parts(board, player.opponent(), GameStatus::InProgress)
        }
    }

    /// Returns the current immutable snapshot.
    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.state)
    }

    /// Returns the current state by reference.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.state.is_draw()
    }

    /// Returns true once the game is won or drawn.
    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    /// Accessibility label for the cell at `index`.
    pub fn cell_label(&self, index: usize) -> String {
        self.state.cell_label(index)
    }

    /// Returns the winning line of a won game.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.state.winning_line()
    }
}
