//! Chat runner - main event loop coordinator

use super::input::{CommandResult, InputAction, handle_input};
use super::ui::ChatUI;
use super::view::ChatView;
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use docai_core::{AppConfig, AskBackend, ChatClient, Resolution};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

const HELP_TEXT: &str = "Enter send · Esc clear, or exit when empty · Ctrl+C clear · Ctrl+Q exit · \
     ↑/↓ PgUp/PgDn scroll · Ctrl+U top · Ctrl+D bottom · /exit quit";

/// Run the TUI chat interface
pub async fn run_chat<B>(backend: Arc<B>, config: &AppConfig) -> io::Result<()>
where
    B: AskBackend + 'static,
{
    let mut terminal = init_terminal()?;
    let mut client = ChatClient::new(backend);
    let mut view = ChatView::new();

    let result = run_chat_loop(&mut terminal, &mut client, &mut view, config).await;

    restore_terminal()?;
    result
}

/// Internal chat loop
async fn run_chat_loop<B>(
    terminal: &mut Tui,
    client: &mut ChatClient<B>,
    view: &mut ChatView,
    config: &AppConfig,
) -> io::Result<()>
where
    B: AskBackend + 'static,
{
    let (response_tx, mut response_rx) = mpsc::channel::<Resolution>(10);

    loop {
        while let Ok(resolution) = response_rx.try_recv() {
            client.apply(resolution);
        }
        view.scroll.on_update(client.state().revision());

        terminal.draw(|frame| {
            ChatUI::render(frame, client.state(), view, config);
        })?;

        let timeout = if client.state().is_pending() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;

            match handle_input(client.state_mut(), event) {
                InputAction::Exit | InputAction::Command(CommandResult::Exit) => {
                    info!("Leaving chat");
                    return Ok(());
                }

                InputAction::Submit => {
                    if client.dispatch(response_tx.clone()) {
                        view.status_message = None;
                    }
                }

                InputAction::Command(CommandResult::ShowHelp) => {
                    view.status_message = Some(HELP_TEXT.to_string());
                }

                InputAction::ScrollUp => view.scroll.scroll_up(),
                InputAction::ScrollDown => view.scroll.scroll_down(),
                InputAction::PageUp => view.scroll.page_up(),
                InputAction::PageDown => view.scroll.page_down(),
                InputAction::ScrollTop => view.scroll.scroll_to_top(),
                InputAction::ScrollBottom => view.scroll.scroll_to_bottom(),

                InputAction::None => {}
            }
        } else if client.state().is_pending() {
            view.tick_spinner();
        }
    }
}
