use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_TOKENS, TEMPERATURE};
use crate::error::ProviderError;

use super::Provider;

/// Chat-completion client for OpenRouter (or any API speaking the same
/// `/chat/completions` dialect). One request per call, no retries.
pub struct OpenRouterProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl OpenRouterProvider {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model: model.to_string(),
            api_key: api_key.to_string(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn classify(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout(self.timeout)
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl Provider for OpenRouterProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let messages = [Message {
            role: "user",
            content: prompt,
        }];
        let body = ApiRequest {
            model: &self.model,
            messages: &messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        tracing::debug!(endpoint = %self.endpoint, model = %self.model, "requesting completion");

        let resp = self
            .client
            .post(&self.endpoint)
            .header("authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(status, error = %e, "failed to read error body");
                    String::new()
                }
            };
            tracing::error!(status, "provider returned an error status");
            return Err(ProviderError::Status { status, body });
        }

        let text = resp.text().await.map_err(|e| self.classify(e))?;
        let api_resp: ApiResponse = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(error = %e, "undecodable completion envelope");
            ProviderError::InvalidBody(e.to_string())
        })?;

        if let Some(usage) = api_resp.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "completion usage"
            );
        }

        api_resp
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ProviderError::NoChoices)
    }
}

// --- API types ---

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [Message<'a>],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}
