//! Terminal front-end for tic-tac-toe.
//!
//! The front-end is a thin view over [`GameEngine`](crate::GameEngine): it
//! renders the engine's snapshot and forwards key presses and clicks.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{digit_position, move_cursor};
pub use ui::{cell_at, draw};

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Run the interactive game until the user quits.
pub fn run_tui(config: TuiConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(config = ?config, "Starting tic-tac-toe TUI");

    let res = {
        let _guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        run_app(&mut terminal, App::new(config))
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// Holds the terminal in raw mode on the alternate screen until dropped.
///
/// Restoration runs on every exit path, including setup failures after raw
/// mode is on and panics inside the game loop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal(&mut io::stdout());
            hook(info);
        }));

        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(&mut io::stdout()) {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode, the alternate screen and mouse capture, and shows the cursor.
fn restore_terminal<W: io::Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)?;
    raw
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        if app.take_redraw() {
            terminal.draw(|f| draw(f, &app))?;
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let screen = Rect::new(0, 0, size.width, size.height);
                if let Some(position) = cell_at(screen, mouse.column, mouse.row) {
                    app.click(position);
                }
            }
            Event::Resize(_, _) => {
                terminal.draw(|f| draw(f, &app))?;
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_terminal_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }

    #[test]
    fn test_restore_terminal_is_safe_without_raw_mode() {
        let mut out = Vec::new();
        assert!(restore_terminal(&mut out).is_ok());
        assert!(restore_terminal(&mut out).is_ok());
    }
}
