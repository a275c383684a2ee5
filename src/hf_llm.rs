use crate::config::Config;
use crate::llm::{LLMClient, TextGeneration};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
struct Parameters {
    max_new_tokens: u32,
}

#[derive(Serialize)]
struct RequestBody<'a> {
    inputs: &'a str,
    parameters: Parameters,
}

#[derive(Deserialize)]
struct Generated {
    generated_text: String,
}

/// Extract the generated text from a successful response body.
fn parse_generation(body: Value) -> Result<String> {
    let first = match body {
        Value::Array(items) => items
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("malformed response: empty output"))?,
        other => other,
    };
    let generated: Generated =
        serde_json::from_value(first).context("malformed response: missing generated_text")?;
    Ok(generated.generated_text)
}

/// Pull the backend's own message out of an error body, if any.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("error")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                .collect::<Vec<_>>()
                .join("; "),
        ),
        other => Some(other.to_string()),
    }
}

/// [`LLMClient`] implementation backed by the Hugging Face inference API.
#[derive(Clone)]
pub struct HuggingFaceLLM {
    client: Client,
    api_base: String,
    token: String,
}

impl HuggingFaceLLM {
    /// Creates a client for `api_base` authenticating with `token`.
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_base, token)
    }

    /// Creates a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: Client,
        api_base: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.settings.api_base.clone(), config.token.clone())
    }

    /// Endpoint serving `model`.
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}", self.api_base, model)
    }
}

#[async_trait]
impl LLMClient for HuggingFaceLLM {
    async fn generate(&self, request: &TextGeneration) -> Result<String> {
        let url = self.endpoint(&request.model);
        tracing::debug!(%url, max_new_tokens = request.max_new_tokens, "text generation request");
        let body = RequestBody {
            inputs: &request.inputs,
            parameters: Parameters {
                max_new_tokens: request.max_new_tokens,
            },
        };
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, "text generation failed");
            match error_message(&text) {
                Some(msg) => anyhow::bail!(msg),
                None => anyhow::bail!("inference request failed with status {status}"),
            }
        }

        let value: Value = resp
            .json()
            .await
            .context("malformed response: body is not JSON")?;
        let text = parse_generation(value)?;
        tracing::trace!(len = text.len(), "text generation response");
        Ok(text)
    }
}
