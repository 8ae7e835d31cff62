use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use agentchat_logging::{log_request, log_response};

use crate::client::{build_http_client, LlmClient};
use crate::config::ClientOptions;
use crate::error::{error_message_from_body, LlmError};

const BACKEND: &str = "gemini";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Google Gemini client using the `generateContent` REST endpoint
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
    verbose: bool,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, base_url: String, options: &ClientOptions) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey { backend: BACKEND }.into());
        }

        Ok(Self {
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: build_http_client(options)?,
            verbose: options.verbose,
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };
        let url = self.generate_url();

        log_request(&url, &serde_json::to_value(&request)?, Some(self.api_key.as_str()), self.verbose);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(LlmError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(LlmError::from)?;
        log_response(&status, &body, self.verbose);

        if !status.is_success() {
            return Err(LlmError::Api {
                backend: BACKEND,
                status: status.as_u16(),
                message: error_message_from_body(&body),
            }
            .into());
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        extract_text(parsed)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn backend_name(&self) -> &'static str {
        BACKEND
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String> {
    if let Some(reason) = response.prompt_feedback.and_then(|feedback| feedback.block_reason) {
        return Err(LlmError::Blocked {
            backend: BACKEND,
            reason,
        }
        .into());
    }

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(LlmError::EmptyResponse { backend: BACKEND }.into());
    }

    Ok(text.to_string())
}
