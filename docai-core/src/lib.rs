//! # docai-core
//!
//! UI-independent core of the docai chat client.
//!
//! ## Modules
//!
//! - [`chat`] - conversation log, chat state and the [`ChatClient`] controller
//! - [`client`] - the `/ask` HTTP contract and the [`AskBackend`] seam
//! - [`config`] - configuration loading and validation
//! - [`constants`] - default paths, endpoint and fixed view strings

pub mod chat;
pub mod client;
pub mod config;
pub mod constants;

pub use chat::{
    Bubble, BubbleKind, ChatClient, ChatState, ConversationEntry, ConversationLog, Resolution,
    Role, SourceChips, Submission, render_bubbles,
};
pub use client::{AskBackend, AskError, AskRequest, AskResponse, HttpAskClient};
pub use config::{AppConfig, ConfigError};
