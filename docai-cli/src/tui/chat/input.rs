//! Chat input handling

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use docai_core::ChatState;

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the current draft as a question
    Submit,
    /// Exit the chat
    Exit,
    /// Run a local command; the draft has been cleared
    Command(CommandResult),
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
}

/// Handle a terminal event and update the draft
///
/// The draft stays editable while a request is pending; only submitting is
/// held back until the answer arrives.
pub fn handle_input(state: &mut ChatState, event: Event) -> InputAction {
    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Paste(text) => {
            for c in text.chars().filter(|c| !c.is_control()) {
                state.insert_char(c);
            }
            InputAction::None
        }
        _ => InputAction::None,
    }
}

fn handle_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match key.code {
            KeyCode::Char('q') => InputAction::Exit,
            KeyCode::Char('c') => {
                state.clear_draft();
                InputAction::None
            }
            KeyCode::Char('u') => InputAction::ScrollTop,
            KeyCode::Char('d') => InputAction::ScrollBottom,
            _ => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Enter => {
            if state.draft().trim().is_empty() {
                return InputAction::None;
            }
            if let Some(command) = parse_command(state.draft()) {
                state.clear_draft();
                return InputAction::Command(command);
            }
            if state.is_pending() {
                return InputAction::None;
            }
            InputAction::Submit
        }
        KeyCode::Esc => {
            if state.draft().is_empty() {
                return InputAction::Exit;
            }
            state.clear_draft();
            InputAction::None
        }
        KeyCode::Backspace => {
            state.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            state.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up => InputAction::ScrollUp,
        KeyCode::Down => InputAction::ScrollDown,
        KeyCode::PageUp => InputAction::PageUp,
        KeyCode::PageDown => InputAction::PageDown,
        KeyCode::Tab => {
            state.insert_char(' ');
            state.insert_char(' ');
            InputAction::None
        }
        KeyCode::Char(c) => {
            state.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

/// Recognise a draft that is exactly one of the local commands
///
/// Anything else, `/`-prefixed or not, is a question for the server.
pub fn parse_command(input: &str) -> Option<CommandResult> {
    let name = input.trim().strip_prefix('/')?.to_ascii_lowercase();

    match name.as_str() {
        "help" | "?" => Some(CommandResult::ShowHelp),
        "exit" | "quit" | "bye" => Some(CommandResult::Exit),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    ShowHelp,
    Exit,
}
