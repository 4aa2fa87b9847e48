use crate::constants::SERVER_ERROR_MESSAGE;
use reqwest::StatusCode;
use thiserror::Error;

/// A failed `/ask` request
///
/// Every variant is a request failure from the user's point of view; the
/// chat client absorbs all of them into the same bot message.
#[derive(Debug, Error)]
pub enum AskError {
    #[error("network error calling {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("{url} returned an invalid response: {source}")]
    InvalidResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AskError {
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    pub fn status(url: impl Into<String>, status: StatusCode) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    pub fn invalid_response(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidResponse {
            url: url.into(),
            source,
        }
    }

    /// Text shown in the conversation for this failure
    pub fn user_message(&self) -> &'static str {
        SERVER_ERROR_MESSAGE
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            AskError::Network { source, .. } if source.is_connect() => "connect",
            AskError::Network { .. } => "network",
            AskError::Status { .. } => "status",
            AskError::InvalidResponse { .. } => "invalid_response",
        }
    }
}
