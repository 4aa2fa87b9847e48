use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// A single conversation entry
///
/// Equality covers role, text and sources; `created_at` is display data.
#[derive(Debug, Clone)]
pub struct ConversationEntry {
    pub role: Role,
    pub text: String,
    pub sources: Vec<String>,
    pub created_at: DateTime<Local>,
}

impl ConversationEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text.into(), Vec::new())
    }

    pub fn bot(text: impl Into<String>, sources: Vec<String>) -> Self {
        Self::new(Role::Bot, text.into(), sources)
    }

    fn new(role: Role, text: String, sources: Vec<String>) -> Self {
        Self {
            role,
            text,
            sources,
            created_at: Local::now(),
        }
    }
}

impl PartialEq for ConversationEntry {
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role && self.text == other.text && self.sources == other.sources
    }
}

impl Eq for ConversationEntry {}
