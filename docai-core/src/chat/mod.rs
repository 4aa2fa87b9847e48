//! Conversation model and request lifecycle
//!
//! - entry.rs: a single conversation entry
//! - log.rs: the append-only conversation log
//! - state.rs: draft, log and pending flag with their mutation entry points
//! - controller.rs: [`ChatClient`], which drives requests against an [`AskBackend`]
//! - view.rs: the render model derived from [`ChatState`]
//!
//! [`AskBackend`]: crate::client::AskBackend

mod controller;
mod entry;
mod log;
mod state;
mod view;

pub use controller::{ChatClient, Resolution};
pub use entry::{ConversationEntry, Role};
pub use log::ConversationLog;
pub use state::{ChatState, Submission};
pub use view::{Bubble, BubbleKind, SourceChips, render_bubbles};
