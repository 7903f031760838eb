use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Hosted endpoint used when `INTERVIEW_AI_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used when `INTERVIEW_AI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Clone, Debug)]
pub struct ChatConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl ChatConfig {
    /// Reads the configuration from the environment.
    ///
    /// Returns `None` when `INTERVIEW_AI_API_KEY` is absent or blank. A
    /// missing key is not an error at startup; it surfaces as
    /// [`ChatError::Disabled`] on the first remote call.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("INTERVIEW_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("INTERVIEW_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = env::var("INTERVIEW_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Seam between the interview services and the remote completion endpoint.
///
/// One call shape only: a system persona plus a user prompt, answered with
/// the free-text content of the first choice.
#[async_trait]
pub trait ChatCompletions: Send + Sync {
    /// Issue a single completion request.
    ///
    /// # Errors
    ///
    /// Returns `ChatError` when the client is disabled, the request fails,
    /// or the response carries no content.
    async fn complete(&self, system: &str, user: &str) -> Result<String, ChatError>;
}

/// `reqwest`-backed client for an OpenAI-compatible chat completions API.
///
/// No retry, no timeout, no caching: a failing call aborts the current
/// interaction and the caller's state stays as it was before the call.
#[derive(Clone)]
pub struct OpenAiChat {
    client: Client,
    config: Option<ChatConfig>,
}

impl OpenAiChat {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ChatConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<ChatConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl ChatCompletions for OpenAiChat {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ChatError> {
        let config = self.config.as_ref().ok_or(ChatError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user.to_string(),
                },
            ],
        };

        tracing::debug!(model = %config.model, "sending chat completion request");
        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChatError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ChatError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
