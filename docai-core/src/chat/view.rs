//! Render model for the conversation

use chrono::{DateTime, Local};

use super::entry::Role;
use super::state::ChatState;
use crate::constants::THINKING_LABEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleKind {
    User,
    Bot,
    /// Transient placeholder while a request is pending
    Thinking,
}

/// What a bot bubble shows under its text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceChips<'a> {
    Cited(&'a [String]),
    /// Render the "no sources" placeholder
    Empty,
}

/// One rendered chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble<'a> {
    pub kind: BubbleKind,
    pub text: &'a str,
    /// `None` for user and thinking bubbles
    pub sources: Option<SourceChips<'a>>,
    pub created_at: Option<DateTime<Local>>,
}

/// Map the state to bubbles: one per entry, plus the thinking bubble while
/// a request is pending
pub fn render_bubbles(state: &ChatState) -> Vec<Bubble<'_>> {
    let mut bubbles: Vec<Bubble<'_>> = state
        .log()
        .iter()
        .map(|entry| match entry.role {
            Role::User => Bubble {
                kind: BubbleKind::User,
                text: &entry.text,
                sources: None,
                created_at: Some(entry.created_at),
            },
            Role::Bot => Bubble {
                kind: BubbleKind::Bot,
                text: &entry.text,
                sources: Some(if entry.sources.is_empty() {
                    SourceChips::Empty
                } else {
                    SourceChips::Cited(&entry.sources)
                }),
                created_at: Some(entry.created_at),
            },
        })
        .collect();

    if state.is_pending() {
        bubbles.push(Bubble {
            kind: BubbleKind::Thinking,
            text: THINKING_LABEL,
            sources: None,
            created_at: None,
        });
    }
    bubbles
}
