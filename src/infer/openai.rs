//! Thin client for the chat-completions endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ROLE_USER: &str = "user";

/// Sampling is pinned so the same molecule yields the same report.
pub const TEMPERATURE: f32 = 0.0;
/// Output cap: three technique tables plus follow-ups fit comfortably.
pub const MAX_COMPLETION_TOKENS: u32 = 1500;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Response parsing failed: {0}")]
    ParseFailed(#[from] serde_json::Error),

    #[error("Error response from API: {0}")]
    ErrorResponse(String),

    #[error("No completion choices in API response")]
    MissingContent,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Box<str>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorPayload,
}

// OpenAI proper nests the message; some compatible servers return a bare
// string. Accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorPayload {
    Structured { message: String },
    Plain(String),
}

impl ErrorPayload {
    fn into_message(self) -> String {
        match self {
            Self::Structured { message } => message,
            Self::Plain(message) => message,
        }
    }
}

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: Box<str>,
    base_url: Box<str>,
    model: Box<str>,
}

impl OpenAiClient {
    pub fn new(api_key: Box<str>, base_url: Box<str>, model: Box<str>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` as the sole user message with deterministic sampling
    /// and returns the completion text verbatim.
    pub async fn complete(&self, prompt: &str) -> Result<Box<str>, ApiError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: ROLE_USER,
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        let response_text = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .text()
            .await?;

        // Try parsing as error response first
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&response_text) {
            return Err(ApiError::ErrorResponse(envelope.error.into_message()));
        }

        // If not error, parse as success response
        let response: ChatCompletionResponse = serde_json::from_str(&response_text)?;
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ApiError::MissingContent)
    }
}
