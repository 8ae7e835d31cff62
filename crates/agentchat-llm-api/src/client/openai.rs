use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use agentchat_logging::{log_request, log_response};

use crate::client::{build_http_client, ChatMessage, LlmClient};
use crate::config::{normalize_api_url, ClientOptions};
use crate::error::{error_message_from_body, LlmError};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for OpenAI's chat completions API and compatible servers (llama.cpp, vLLM, ...)
pub struct OpenAiCompatibleClient {
    api_key: Option<String>,
    model: String,
    url: String,
    backend: &'static str,
    client: reqwest::Client,
    verbose: bool,
}

impl OpenAiCompatibleClient {
    /// `api_key` may be `None` for self-hosted servers that do not check it
    pub fn new(
        api_key: Option<String>,
        model: String,
        api_url: &str,
        backend: &'static str,
        options: &ClientOptions,
    ) -> Result<Self> {
        Ok(Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model,
            url: normalize_api_url(api_url),
            backend,
            client: build_http_client(options)?,
            verbose: options.verbose,
        })
    }
}

#[async_trait]
impl LlmClient for OpenAiCompatibleClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage::user(prompt)],
        };

        log_request(&self.url, &serde_json::to_value(&request)?, self.api_key.as_deref(), self.verbose);

        let mut builder = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(LlmError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(LlmError::from)?;
        log_response(&status, &body, self.verbose);

        if !status.is_success() {
            return Err(LlmError::Api {
                backend: self.backend,
                status: status.as_u16(),
                message: error_message_from_body(&body),
            }
            .into());
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        let content = content.trim();
        if content.is_empty() {
            return Err(LlmError::EmptyResponse { backend: self.backend }.into());
        }

        Ok(content.to_string())
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn backend_name(&self) -> &'static str {
        self.backend
    }
}
