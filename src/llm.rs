use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// A single text-generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextGeneration {
    /// Backend model identifier.
    pub model: String,
    /// Full prompt, preamble included.
    pub inputs: String,
    pub max_new_tokens: u32,
}

/// Abstract interface for the hosted inference backend.
///
/// Implementations return the raw generated text, which may still contain the
/// echoed prompt.
#[async_trait]
pub trait LLMClient: Send + Sync {
    async fn generate(&self, request: &TextGeneration) -> Result<String>;
}

/// Offline backend that answers like an echoing text-generation endpoint.
///
/// ```
/// use personal_copilot::llm::{EchoLLM, LLMClient, TextGeneration};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> anyhow::Result<()> {
/// let req = TextGeneration { model: "m".into(), inputs: "hi".into(), max_new_tokens: 8 };
/// let out = EchoLLM.generate(&req).await?;
/// assert!(out.starts_with("hi"));
/// # Ok(()) }
/// ```
pub struct EchoLLM;

#[async_trait]
impl LLMClient for EchoLLM {
    async fn generate(&self, request: &TextGeneration) -> Result<String> {
        Ok(format!(
            "{}\n[offline] {} was not contacted.",
            request.inputs, request.model
        ))
    }
}
