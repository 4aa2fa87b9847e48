//! Raw mode, alternate screen and bracketed paste for the chat screen

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::debug;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Take over the terminal
///
/// Pasted text arrives as one event instead of a burst of key presses, so a
/// pasted newline never submits the draft.
pub fn init_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    debug!("Terminal switched to raw mode");
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Hand the terminal back to the shell
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    debug!("Terminal restored");
    Ok(())
}
