//! Application state and logic.

use super::input::{digit_position, move_cursor};
use crate::config::TuiConfig;
use crate::games::tictactoe::{GameEngine, GameState, GameStatus, Position};
use crossterm::event::KeyCode;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Main application state.
///
/// The engine is the only source of game state; the app adds the cursor and
/// a transient notice.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    config: TuiConfig,
    cursor: Position,
    notice: Option<String>,
    rendered: Option<Arc<GameState>>,
    view_dirty: bool,
    quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: TuiConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            config,
            cursor: Position::Center,
            notice: None,
            rendered: None,
            view_dirty: true,
            quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the configuration.
    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Gets the cursor cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the last notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Status line for the current state.
    pub fn status_line(&self) -> String {
        match self.engine.status() {
            GameStatus::InProgress => format!("Player {}'s turn", self.engine.current_player()),
            GameStatus::Won(winner) => format!("Player {} wins!", winner),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }

    /// Accessibility label of the cursor cell, when enabled.
    pub fn cursor_label(&self) -> Option<String> {
        self.config
            .show_cell_labels()
            .then(|| self.engine.cell_label(self.cursor.to_index()))
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            code => {
                if let Some(position) = digit_position(code) {
                    self.place(position);
                } else {
                    let next = move_cursor(self.cursor, code);
                    if next != self.cursor {
                        self.cursor = next;
                        self.view_dirty = true;
                    }
                }
            }
        }
    }

    /// Handles a click on a board cell.
    #[instrument(skip(self))]
    pub fn click(&mut self, position: Position) {
        self.place(position);
    }

    /// Places the current player's mark and moves the cursor there.
    fn place(&mut self, position: Position) {
        self.cursor = position;
        self.notice = match self.engine.try_move(position) {
            Ok(made) => {
                debug!(%made, "Move applied to UI state");
                None
            }
            Err(e) => Some(e.to_string()),
        };
        self.view_dirty = true;
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.notice = None;
        self.view_dirty = true;
    }

    /// Returns true if something visible changed since the last call.
    ///
    /// Game changes are detected by snapshot identity.
    pub fn take_redraw(&mut self) -> bool {
        let snapshot = self.engine.snapshot();
        let game_changed = !self
            .rendered
            .as_ref()
            .is_some_and(|seen| Arc::ptr_eq(seen, &snapshot));
        let redraw = game_changed || self.view_dirty;
        self.rendered = Some(snapshot);
        self.view_dirty = false;
        redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    fn app() -> App {
        App::new(TuiConfig::default())
    }

    #[test]
    fn test_status_line_follows_turns() {
        let mut app = app();
        assert_eq!(app.status_line(), "Player X's turn");
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.status_line(), "Player O's turn");
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.engine().board().get(Position::TopCenter).mark(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_rejected_move_sets_notice() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.notice(), Some("Cell Center is already occupied"));
        assert_eq!(app.engine().current_player(), Player::O);
    }

    #[test]
    fn test_win_and_restart() {
        let mut app = app();
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.status_line(), "Player X wins!");

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.status_line(), "Player X's turn");
        assert_eq!(app.notice(), None);
        assert_eq!(app.engine().state(), &GameState::new());
    }

    #[test]
    fn test_cursor_label() {
        let app = app();
        assert_eq!(app.cursor_label().as_deref(), Some("Row 2, Column 2, empty"));
    }

    #[test]
    fn test_take_redraw_tracks_snapshot() {
        let mut app = app();
        assert!(app.take_redraw());
        assert!(!app.take_redraw());

        app.click(Position::TopLeft);
        assert!(app.take_redraw());
        assert!(!app.take_redraw());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}
