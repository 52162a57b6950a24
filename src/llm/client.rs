use std::time::Duration;

use reqwest::blocking::Client as BlockingClient;
use serde_json::json;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

use super::types::{ChatCompletionResponse, ChatMessage, ImageGenerationResponse};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for the chat-completion and image-generation endpoints.
pub struct LlmClient {
    http: BlockingClient,
    api_base: String,
    api_key: String,
}

impl LlmClient {
    pub fn new_from_config(cfg: &Config) -> Result<Self> {
        let http = BlockingClient::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(cfg.request_timeout)
            .build()
            .map_err(|err| Error::upstream(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
        })
    }

    /// Sends one chat-completion request and returns the first candidate's
    /// text.
    pub fn chat_completion(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        let body = json!({
            "model": model,
            "messages": messages
                .iter()
                .map(|msg| json!({"role": msg.role, "content": msg.content}))
                .collect::<Vec<_>>(),
        });

        let url = format!("{}/chat/completions", self.api_base);
        debug!(%url, model, "sending chat completion request");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .map_err(|err| Error::upstream(format!("chat request to {url} failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().unwrap_or_default();
            return Err(Error::upstream(format!(
                "chat endpoint returned status {status}: {body_text}"
            )));
        }

        let completion: ChatCompletionResponse = response.json().map_err(|err| {
            Error::upstream(format!("chat completion response was not valid JSON: {err}"))
        })?;

        completion
            .first_text()
            .ok_or_else(|| Error::upstream("chat completion response contained no choices"))
    }

    /// Requests a single square image and returns its remote URL. The caller
    /// decides when to download.
    pub fn generate_image(&self, prompt: &str, size: &str) -> Result<String> {
        let body = json!({
            "prompt": prompt,
            "n": 1,
            "size": size,
        });

        let url = format!("{}/images/generations", self.api_base);
        debug!(%url, size, "sending image generation request");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .map_err(|err| Error::upstream(format!("image request to {url} failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().unwrap_or_default();
            return Err(Error::upstream(format!(
                "image endpoint returned status {status}: {body_text}"
            )));
        }

        let generated: ImageGenerationResponse = response.json().map_err(|err| {
            Error::upstream(format!("image generation response was not valid JSON: {err}"))
        })?;

        generated
            .first_url()
            .ok_or_else(|| Error::upstream("image endpoint returned no results"))
    }
}
