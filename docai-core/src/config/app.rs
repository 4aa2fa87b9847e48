use super::error::ConfigError;
use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_PLACEHOLDER, DEFAULT_TAGLINE, DEFAULT_TITLE};
use reqwest::Url;
use std::path::{Path, PathBuf};

/// Application configuration loaded from client.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base address of the question-answering service
    pub endpoint: String,
    pub title: String,
    pub tagline: String,
    pub placeholder: String,
    /// Where tracing output goes while the terminal UI owns stdout
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Replace the endpoint after validating it
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        self.endpoint = validate_endpoint(endpoint.into())?;
        Ok(self)
    }
}

/// Accept absolute `http`/`https` URLs only
pub(super) fn validate_endpoint(endpoint: String) -> Result<String, ConfigError> {
    let trimmed = endpoint.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| ConfigError::invalid_endpoint(&endpoint, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::invalid_endpoint(
                &endpoint,
                format!("unsupported scheme '{other}'"),
            ));
        }
    }
    if url.host_str().is_none() {
        return Err(ConfigError::invalid_endpoint(&endpoint, "missing host"));
    }
    Ok(trimmed.to_string())
}
