//! Application constants
//!
//! Single source of truth for paths, endpoint defaults and the fixed
//! strings the chat view shows.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/client.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV: &str = "DOCAI_ENDPOINT";

/// Base address of the question-answering service
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Path of the question-answering route, relative to the endpoint
pub const ASK_PATH: &str = "/ask";

/// Bot text recorded when a request fails for any reason
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Placeholder shown under a bot answer that cites nothing
pub const NO_SOURCES_LABEL: &str = "No sources found";

/// Text of the transient bubble shown while a request is in flight
pub const THINKING_LABEL: &str = "Thinking...";

pub const DEFAULT_TITLE: &str = "JatinDocAI";
pub const DEFAULT_TAGLINE: &str = "Document Intelligence System";
pub const DEFAULT_PLACEHOLDER: &str = "Ask a question from your knowledge base...";
