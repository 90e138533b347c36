use std::io::{self, Stdout, Write};
use std::panic;

use anyhow::{Context, Result};
use crossterm::cursor::Show;
use crossterm::event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::Game;
use crate::render;

/// Owns the terminal for the lifetime of the program. Dropping it puts the
/// terminal back; a panic restores it from the hook, before the message is
/// printed.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        match Self::setup() {
            Ok(terminal) => {
                install_panic_hook();
                Ok(Tui { terminal })
            }
            Err(err) => {
                let _ = restore();
                Err(err)
            }
        }
    }

    fn setup() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)
            .context("failed to switch to the alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(terminal)
    }

    /// Width and height available to the grid; the top row is kept for the
    /// score.
    pub fn grid_size(&self) -> Result<(usize, usize)> {
        let size = self.terminal.size().context("failed to query terminal size")?;
        Ok((size.width as usize, size.height.saturating_sub(1) as usize))
    }

    pub fn draw<R>(&mut self, game: &Game<R>) -> Result<()> {
        self.terminal.draw(|frame| render::render(frame, game))?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = restore();
    }
}

/// Run the previous hook only after the terminal is back to normal, so the
/// panic message lands on the main screen.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous(info);
    }));
}

fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = write_restore(&mut io::stdout());
    raw.and(screen)
}

fn write_restore(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, DisableBracketedPaste, Show)
}
