//! reqwest client for `/ask`

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use super::AskBackend;
use super::error::AskError;
use super::types::{AskRequest, AskResponse};
use crate::constants::ASK_PATH;

/// HTTP implementation of [`AskBackend`]
#[derive(Clone)]
pub struct HttpAskClient {
    endpoint: String,
    http: Client,
}

impl HttpAskClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build URL from endpoint and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[async_trait]
impl AskBackend for HttpAskClient {
    async fn ask(&self, question: &str) -> Result<AskResponse, AskError> {
        let url = self.build_url(ASK_PATH);
        let payload = AskRequest::new(question);

        info!(
            url = url.as_str(),
            chars = question.chars().count(),
            "Sending question"
        );

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| AskError::network(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AskError::status(&url, status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AskError::network(&url, e))?;
        let answer: AskResponse =
            serde_json::from_str(&body).map_err(|e| AskError::invalid_response(&url, e))?;

        debug!(
            status = status.as_u16(),
            sources = answer.sources.len(),
            "Received answer"
        );
        Ok(answer)
    }
}
