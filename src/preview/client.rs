//! Chat completions client for the generative text service

use crate::config::Config;
use crate::error::AppError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// The JSON payload the model is instructed to return.
#[derive(Debug, Deserialize)]
struct PreviewPayload {
    preview: String,
}

/// Calls the generative text service. Holds no state beyond its settings.
#[derive(Debug, Clone)]
pub struct PreviewClient {
    http: Client,
    url: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl PreviewClient {
    pub fn from_config(http: Client, config: &Config) -> Self {
        Self {
            http,
            url: config.openai_api_url.clone(),
            api_key: config.credential().map(str::to_string),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Requests one preview and returns its narrative text.
    ///
    /// Fails with [`AppError::NoCredential`] when no key is configured and
    /// with [`AppError::GenerationFailed`] on a transport error, a
    /// non-success status or a reply whose content is not the expected
    /// `{"preview": "..."}` object.
    #[instrument(skip(self, system, prompt))]
    pub async fn generate(
        &self,
        game_id: &str,
        system: &str,
        prompt: &str,
    ) -> Result<String, AppError> {
        let api_key = self.api_key.as_deref().ok_or(AppError::NoCredential)?;

        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::generation_failed(game_id, format!("request failed: {e}")))?;

        let status = response.status();
        debug!("Generation response status: {status}");
        if !status.is_success() {
            return Err(AppError::generation_failed(
                game_id,
                format!("service returned HTTP {}", status.as_u16()),
            ));
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            AppError::generation_failed(game_id, format!("unreadable response body: {e}"))
        })?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::generation_failed(game_id, "response has no message content"))?;

        parse_preview(&content).map_err(|reason| AppError::generation_failed(game_id, reason))
    }
}

/// Extracts the narrative from the model's message content.
///
/// Models sometimes wrap JSON in a Markdown code fence; the fence is stripped
/// before parsing.
fn parse_preview(content: &str) -> Result<String, String> {
    let trimmed = strip_code_fence(content.trim());

    let payload: PreviewPayload = serde_json::from_str(trimmed)
        .map_err(|e| format!("message content is not a preview object: {e}"))?;

    let preview = payload.preview.trim();
    if preview.is_empty() {
        return Err("preview text is empty".to_string());
    }
    Ok(preview.to_string())
}

fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    // Drop an optional language tag on the opening fence line
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
