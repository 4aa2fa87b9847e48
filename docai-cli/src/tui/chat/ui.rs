//! Chat UI rendering components

use super::input::parse_command;
use super::view::ChatView;
use super::wrap::{pad_to, visible_window, wrap_text};
use crate::tui::theme;
use docai_core::constants::NO_SOURCES_LABEL;
use docai_core::{AppConfig, Bubble, BubbleKind, ChatState, SourceChips, render_bubbles};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Share of the message area a bubble may take, in percent
const BUBBLE_WIDTH_PERCENT: usize = 68;
const MIN_BUBBLE_WIDTH: usize = 16;

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(frame: &mut Frame, state: &ChatState, view: &mut ChatView, config: &AppConfig) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Messages area
                Constraint::Length(3), // Input area
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        Self::render_header(frame, chunks[0], config);
        Self::render_messages(frame, chunks[1], state, view, config);
        Self::render_input(frame, chunks[2], state, config);
        Self::render_help_bar(frame, chunks[3], state, view, config);
    }

    fn render_header(frame: &mut Frame, area: Rect, config: &AppConfig) {
        let lines = vec![
            Line::from(Span::styled(format!(" {}", config.title), theme::title())),
            Line::from(Span::styled(format!(" {}", config.tagline), theme::subtitle())),
        ];
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_messages(
        frame: &mut Frame,
        area: Rect,
        state: &ChatState,
        view: &mut ChatView,
        config: &AppConfig,
    ) {
        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(theme::border());
        let inner = block.inner(area);

        let lines = message_lines(state, view, config, inner.width);
        let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let max_scroll = total.saturating_sub(inner.height);
        let offset = view.scroll.resolve(max_scroll, inner.height);

        let para = Paragraph::new(lines).block(block).scroll((offset, 0));
        frame.render_widget(para, area);
    }

    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState, config: &AppConfig) {
        let pending = state.is_pending();
        let send = if pending {
            Span::styled(" → ", theme::send_disabled())
        } else {
            Span::styled(" → ", theme::send_enabled())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if pending {
                theme::border()
            } else {
                theme::border_active()
            })
            .title(if parse_command(state.draft()).is_some() {
                " Command "
            } else {
                " Ask "
            })
            .title(Line::from(send).right_aligned());
        let inner = block.inner(area);

        let prompt = Span::styled("> ", theme::border_active());
        let available = usize::from(inner.width.saturating_sub(2));

        let (input_line, cursor_col) = if state.draft().is_empty() {
            let line = Line::from(vec![
                prompt,
                Span::styled(config.placeholder.clone(), theme::placeholder()),
            ]);
            (line, 0)
        } else {
            let (visible, cursor_col) =
                visible_window(state.draft(), state.cursor_pos(), available);
            let line = Line::from(vec![prompt, Span::styled(visible, theme::text())]);
            (line, cursor_col)
        };
        frame.set_cursor_position((inner.x + 2 + cursor_col, inner.y));

        frame.render_widget(Paragraph::new(input_line).block(block), area);
    }

    fn render_help_bar(
        frame: &mut Frame,
        area: Rect,
        state: &ChatState,
        view: &ChatView,
        config: &AppConfig,
    ) {
        let help_text = if let Some(status) = &view.status_message {
            Line::from(Span::styled(format!(" {status} "), theme::footer()))
        } else if state.is_pending() {
            Line::from(vec![
                Span::styled(" Waiting for the answer... ", theme::loading()),
                Span::styled("│ you can keep typing ", theme::footer()),
            ])
        } else {
            Line::from(vec![
                Span::styled(" Enter", theme::key_hint()),
                Span::raw(": Send │ "),
                Span::styled("/help", theme::key_hint()),
                Span::raw(": Keys │ "),
                Span::styled("PgUp/PgDn", theme::key_hint()),
                Span::raw(": Scroll │ "),
                Span::styled("Ctrl+Q", theme::key_destructive()),
                Span::raw(": Exit │ "),
                Span::styled(config.endpoint.clone(), theme::footer()),
            ])
        };

        frame.render_widget(Paragraph::new(help_text), area);
    }
}

/// Lines of the message area for a given content width
///
/// Depends only on its arguments, so the same state renders the same way.
pub fn message_lines(
    state: &ChatState,
    view: &ChatView,
    config: &AppConfig,
    width: u16,
) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let bubble_width = (width * BUBBLE_WIDTH_PERCENT / 100)
        .max(MIN_BUBBLE_WIDTH)
        .min(width)
        .max(3);

    let mut lines = Vec::new();
    for bubble in render_bubbles(state) {
        lines.extend(bubble_lines(&bubble, view.spinner(), &config.title, bubble_width));
        lines.push(Line::default());
    }
    lines
}

fn bubble_lines(
    bubble: &Bubble<'_>,
    spinner: &str,
    bot_name: &str,
    bubble_width: usize,
) -> Vec<Line<'static>> {
    // one column of padding on each side
    let text_width = bubble_width - 2;

    let (style, right) = match bubble.kind {
        BubbleKind::User => (theme::user_bubble(), true),
        BubbleKind::Bot => (theme::bot_bubble(), false),
        BubbleKind::Thinking => {
            return vec![
                Line::from(Span::styled(
                    format!(" {spinner} {} ", bubble.text),
                    theme::bot_bubble().patch(theme::loading()),
                ))
                .left_aligned(),
            ];
        }
    };
    let align = |line: Line<'static>| {
        if right {
            line.right_aligned()
        } else {
            line.left_aligned()
        }
    };

    let mut lines = Vec::new();

    let speaker = if right { "You" } else { bot_name };
    let meta = match bubble.created_at {
        Some(at) => format!("{speaker} · {}", at.format("%H:%M")),
        None => speaker.to_string(),
    };
    lines.push(align(Line::from(Span::styled(meta, theme::bubble_meta()))));

    let wrapped = wrap_text(bubble.text, text_width);
    let inner = wrapped.iter().map(|l| l.width()).max().unwrap_or(0);
    for text in wrapped {
        lines.push(align(Line::from(Span::styled(
            format!(" {} ", pad_to(&text, inner)),
            style,
        ))));
    }

    match bubble.sources {
        Some(SourceChips::Cited(sources)) => {
            lines.extend(chip_rows(sources, text_width).into_iter().map(align));
        }
        Some(SourceChips::Empty) => {
            lines.push(align(Line::from(Span::styled(
                format!(" {NO_SOURCES_LABEL}"),
                theme::no_sources(),
            ))));
        }
        None => {}
    }
    lines
}

/// Lay source chips out in order, starting a new row when one would overflow
fn chip_rows(sources: &[String], max_width: usize) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    let mut row_width = 1;

    for source in sources {
        let chip_width = source.width() + 2;
        if row_width > 1 && row_width + 1 + chip_width > max_width {
            rows.push(Line::from(std::mem::replace(&mut spans, vec![Span::raw(" ")])));
            row_width = 1;
        }
        if row_width > 1 {
            spans.push(Span::raw(" "));
            row_width += 1;
        }
        spans.push(Span::styled(format!(" {source} "), theme::source_chip()));
        row_width += chip_width;
    }
    rows.push(Line::from(spans));
    rows
}
