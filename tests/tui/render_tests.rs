//! Chat screen rendering tests on ratatui's TestBackend

use docai_cli::tui::chat::{ChatUI, ChatView, message_lines};
use docai_core::constants::{NO_SOURCES_LABEL, SERVER_ERROR_MESSAGE, THINKING_LABEL};
use docai_core::{AppConfig, AskError, AskResponse, ChatState};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::text::Line;
use reqwest::StatusCode;

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn screen(state: &ChatState, view: &mut ChatView, config: &AppConfig) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|frame| ChatUI::render(frame, state, view, config))
        .unwrap();
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

fn answer(state: &mut ChatState, question: &str, result: Result<AskResponse, AskError>) {
    state.set_draft(question);
    let submission = state.begin_submit().unwrap();
    state.resolve(&submission, result);
}

#[test]
fn empty_screen_shows_header_and_placeholder() {
    let config = AppConfig::default();
    let rows = screen(&ChatState::new(), &mut ChatView::new(), &config);
    let text = rows.join("\n");

    assert!(text.contains(&config.title));
    assert!(text.contains(&config.tagline));
    assert!(text.contains(&config.placeholder));
}

#[test]
fn answer_with_sources_shows_chips() {
    let mut state = ChatState::new();
    answer(
        &mut state,
        "What is X?",
        Ok(AskResponse::new("X is Y", vec!["doc1.pdf".into(), "guide.md".into()])),
    );

    let text = screen(&state, &mut ChatView::new(), &AppConfig::default()).join("\n");

    assert!(text.contains("What is X?"));
    assert!(text.contains("X is Y"));
    assert!(text.contains("doc1.pdf"));
    assert!(text.contains("guide.md"));
    assert!(!text.contains(NO_SOURCES_LABEL));
}

#[test]
fn answer_without_sources_shows_placeholder() {
    let mut state = ChatState::new();
    answer(&mut state, "What is X?", Ok(AskResponse::new("X is Y", Vec::new())));

    let text = screen(&state, &mut ChatView::new(), &AppConfig::default()).join("\n");

    assert!(text.contains(NO_SOURCES_LABEL));
}

#[test]
fn failure_shows_server_error() {
    let mut state = ChatState::new();
    answer(
        &mut state,
        "What is X?",
        Err(AskError::status("http://mock/ask", StatusCode::INTERNAL_SERVER_ERROR)),
    );

    let text = screen(&state, &mut ChatView::new(), &AppConfig::default()).join("\n");

    assert!(text.contains(SERVER_ERROR_MESSAGE));
    assert!(text.contains(NO_SOURCES_LABEL));
}

#[test]
fn pending_shows_thinking() {
    let mut state = ChatState::new();
    state.set_draft("What is X?");
    state.begin_submit().unwrap();

    let text = screen(&state, &mut ChatView::new(), &AppConfig::default()).join("\n");

    assert!(text.contains(THINKING_LABEL));
}

#[test]
fn same_state_renders_identically() {
    let mut state = ChatState::new();
    answer(&mut state, "What is X?", Ok(AskResponse::new("X is Y", vec!["a.pdf".into()])));
    let config = AppConfig::default();

    let first = screen(&state, &mut ChatView::new(), &config);
    let second = screen(&state, &mut ChatView::new(), &config);

    assert_eq!(first, second);
}

#[test]
fn message_lines_are_deterministic() {
    let mut state = ChatState::new();
    answer(&mut state, "q", Ok(AskResponse::new("a", Vec::new())));
    let view = ChatView::new();
    let config = AppConfig::default();

    assert_eq!(
        message_lines(&state, &view, &config, 60),
        message_lines(&state, &view, &config, 60)
    );
}

#[test]
fn long_answers_wrap_within_width() {
    let mut state = ChatState::new();
    let long = "lorem ipsum dolor sit amet ".repeat(12);
    let sources = (0..8).map(|i| format!("document-{i}.pdf")).collect();
    answer(&mut state, "q", Ok(AskResponse::new(long.trim_end(), sources)));

    let lines = message_lines(&state, &ChatView::new(), &AppConfig::default(), 50);

    assert!(lines.iter().all(|line| line.width() <= 50));
    let joined: String = lines.iter().map(line_text).collect::<Vec<_>>().join(" ");
    for i in 0..8 {
        assert!(joined.contains(&format!("document-{i}.pdf")));
    }
}

#[test]
fn newest_message_is_visible_after_many_turns() {
    let mut state = ChatState::new();
    for i in 0..15 {
        answer(
            &mut state,
            &format!("question {i}"),
            Ok(AskResponse::new(format!("answer {i}"), Vec::new())),
        );
    }
    let mut view = ChatView::new();
    view.scroll.on_update(state.revision());

    let text = screen(&state, &mut view, &AppConfig::default()).join("\n");

    assert!(text.contains("answer 14"));
    assert!(!text.contains("question 0"));
}
