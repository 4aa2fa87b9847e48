//! TUI Chat interface module
//!
//! - view.rs: presentation-only state (scroll, spinner, status line)
//! - scroll.rs: follow-the-bottom scrolling hook
//! - ui.rs: rendering
//! - input.rs: key handling and local commands
//! - runner.rs: event loop tying the pieces to a [`docai_core::ChatClient`]

mod input;
mod runner;
mod scroll;
mod ui;
mod view;
mod wrap;

pub use input::{CommandResult, InputAction, handle_input, parse_command};
pub use runner::run_chat;
pub use scroll::ScrollFollow;
pub use ui::{ChatUI, message_lines};
pub use view::ChatView;
