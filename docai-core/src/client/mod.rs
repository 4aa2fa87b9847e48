//! Client side of the `/ask` HTTP contract
//!
//! - types.rs: request and response bodies
//! - error.rs: request failures
//! - http.rs: reqwest implementation of [`AskBackend`]

mod error;
mod http;
mod types;

pub use error::AskError;
pub use http::HttpAskClient;
pub use types::{AskRequest, AskResponse};

use async_trait::async_trait;

/// Anything that can answer a question on behalf of the chat client
#[async_trait]
pub trait AskBackend: Send + Sync {
    /// Send one question and wait for its answer
    async fn ask(&self, question: &str) -> Result<AskResponse, AskError>;
}
