//! Language-model collaborator
//!
//! A thin, single-turn completion client. The gateway treats the model
//! as opaque and untrusted: this module only moves text in and out, and
//! all interpretation happens in the verify pipeline.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Anthropic API version header value
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Errors reaching or reading the model
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level failure (connect, timeout, TLS, body)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider returned a non-success status
    #[error("model API returned status {0}")]
    Status(u16),

    /// Provider response carried no completion text
    #[error("model response contained no text")]
    EmptyResponse,
}

/// Single-turn text completion against a remote model
pub trait LanguageModelClient: Send + Sync {
    /// Send one prompt and return the model's raw text reply
    fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError>;
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Client for the Anthropic Messages API
#[derive(Debug)]
pub struct AnthropicClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// Build a client with a fixed request timeout
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let http = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

impl LanguageModelClient for AnthropicClient {
    fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!("sending completion request to {} (model {})", self.base_url, self.model);

        let response = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Status(status.as_u16()));
        }

        let parsed: MessagesResponse = response.json()?;
        parsed
            .content
            .into_iter()
            .find_map(|block| block.text)
            .ok_or(LlmError::EmptyResponse)
    }
}
