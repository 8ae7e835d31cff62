use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod gemini;
pub mod openai;

/// Chat message structure (OpenAI-compatible format)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// LLM client trait - unified interface for all generation backends
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a reply for a single composed prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model identifier sent to the backend
    fn model(&self) -> &str;

    /// Short backend name for status lines
    fn backend_name(&self) -> &'static str;
}

/// Build the HTTP client shared by the backends, applying the optional timeout
pub(crate) fn build_http_client(options: &crate::config::ClientOptions) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
