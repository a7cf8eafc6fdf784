use std::env;

use thiserror::Error;

use crate::prompts::PromptRevision;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY must be set")]
    MissingApiKey,
    #[error("SPECTRO_BACKEND must be 'openai' or 'dummy', got '{0}'")]
    InvalidBackend(String),
    #[error("SPECTRO_PROMPT_REV must be 1, 2, 3 or 4, got '{0}'")]
    InvalidPromptRevision(String),
    #[error("PORT must be a port number, got '{0}'")]
    InvalidPort(String),
}

pub struct Config {
    pub port: u16,
    pub backend: BackendConfig,
}

pub enum BackendConfig {
    Dummy,
    OpenAi {
        api_key: Box<str>,
        base_url: Box<str>,
        model: Box<str>,
        revision: PromptRevision,
    },
}

impl Config {
    /// Reads the configuration from the environment. Call after
    /// `dotenvy::dotenv()`; any error is fatal at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let backend = match env::var("SPECTRO_BACKEND").as_deref() {
            Ok("dummy") => BackendConfig::Dummy,
            Ok("openai") | Err(_) => openai_backend()?,
            Ok(other) => return Err(ConfigError::InvalidBackend(other.to_owned())),
        };

        Ok(Self { port, backend })
    }
}

fn openai_backend() -> Result<BackendConfig, ConfigError> {
    // A blank credential is as fatal as a missing one.
    let api_key = env::var("OPENAI_API_KEY")
        .ok()
        .map(|key| key.trim().to_owned())
        .filter(|key| !key.is_empty())
        .ok_or(ConfigError::MissingApiKey)?;

    let base_url = env::var("OPENAI_BASE_URL")
        .map(|url| url.trim_end_matches('/').to_owned())
        .unwrap_or_else(|_| DEFAULT_BASE_URL.into());

    let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

    let revision = match env::var("SPECTRO_PROMPT_REV") {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidPromptRevision(raw))?,
        Err(_) => PromptRevision::default(),
    };

    Ok(BackendConfig::OpenAi {
        api_key: api_key.into(),
        base_url: base_url.into(),
        model: model.into(),
        revision,
    })
}
