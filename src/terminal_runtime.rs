use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::renderer::{self, View};

type Backend = CrosstermBackend<io::Stdout>;

/// Raw-mode alternate-screen session; restores the terminal on drop.
pub struct TerminalSession {
    terminal: Terminal<Backend>,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen, undoing both if setup fails.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                restore();
                Err(error)
            }
        }
    }

    /// Draws one frame of `view`.
    pub fn draw(&mut self, view: &View<'_>) -> io::Result<()> {
        let _ = self.terminal.draw(|frame| renderer::render(frame, view))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
    }
}

/// Leaves raw mode and the alternate screen, ignoring failures.
///
/// Also called from the panic hook, where no session value is reachable.
pub fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
}
