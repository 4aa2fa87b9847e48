//! TUI module for the terminal chat using Ratatui

pub mod chat;
mod terminal;
mod theme;

pub use chat::run_chat;
pub use terminal::{Tui, init_terminal, restore_terminal};
