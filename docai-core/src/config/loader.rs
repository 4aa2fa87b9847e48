use super::app::{AppConfig, validate_endpoint};
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENDPOINT_ENV, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    pub endpoint: Option<String>,
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub placeholder: Option<String>,
    pub log_file: Option<String>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration
///
/// An explicit `path` must exist. Without one the default path is tried and
/// built-in defaults are used when it is absent. `DOCAI_ENDPOINT` overrides
/// the endpoint from the file.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();

    let raw = match path {
        Some(path) => read_raw(path)?,
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_raw(default_path)?
            } else {
                debug!(path = CONFIG_PATH, "No configuration file, using defaults");
                RawConfig::default()
            }
        }
    };

    let config = build(raw)?;
    apply_env_override(config, std::env::var(ENDPOINT_ENV).ok())
}

/// Apply the endpoint from the environment, if set and non-blank
pub fn apply_env_override(
    config: AppConfig,
    env_endpoint: Option<String>,
) -> Result<AppConfig, ConfigError> {
    match env_endpoint.filter(|value| !value.trim().is_empty()) {
        Some(endpoint) => {
            debug!(endpoint = endpoint.as_str(), "Endpoint overridden by environment");
            config.with_endpoint(endpoint)
        }
        None => Ok(config),
    }
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading client configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn build(raw: RawConfig) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();

    let endpoint = match raw.endpoint {
        Some(endpoint) => validate_endpoint(endpoint)?,
        None => defaults.endpoint,
    };

    Ok(AppConfig {
        endpoint,
        title: raw.title.unwrap_or(defaults.title),
        tagline: raw.tagline.unwrap_or(defaults.tagline),
        placeholder: raw.placeholder.unwrap_or(defaults.placeholder),
        log_file: raw
            .log_file
            .map(|path| PathBuf::from(shellexpand::tilde(&path).into_owned())),
    })
}
