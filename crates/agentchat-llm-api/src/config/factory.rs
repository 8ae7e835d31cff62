use anyhow::Result;
use std::sync::Arc;

use crate::client::{gemini::GeminiClient, openai::OpenAiCompatibleClient, LlmClient};
use crate::config::{get_default_model_for_backend, get_default_url_for_backend, BackendType, ClientOptions};
use crate::error::LlmError;

/// Client factory for creating LLM clients
pub struct ClientFactory;

impl ClientFactory {
    /// Create an LLM client based on the specified backend type
    ///
    /// # Arguments
    /// * `backend` - The backend type to use (Gemini, OpenAI, Llama)
    /// * `api_key` - API key for authentication (not needed for llama.cpp)
    /// * `model` - Model name to use (backend default if None)
    /// * `api_url` - Optional custom API URL (uses default if None; required for llama.cpp)
    /// * `options` - Timeout and verbosity shared by every backend
    pub fn create(
        backend: BackendType,
        api_key: Option<String>,
        model: Option<String>,
        api_url: Option<String>,
        options: &ClientOptions,
    ) -> Result<Arc<dyn LlmClient>> {
        let model = model.unwrap_or_else(|| get_default_model_for_backend(backend).to_string());
        let api_url = api_url.or_else(|| get_default_url_for_backend(backend).map(str::to_string));

        match backend {
            BackendType::Gemini => {
                let key = api_key.ok_or(LlmError::MissingApiKey { backend: "gemini" })?;
                let url = api_url.ok_or(LlmError::MissingApiUrl { backend: "gemini" })?;
                Ok(Arc::new(GeminiClient::new(key, model, url, options)?))
            }
            BackendType::OpenAI => {
                let key = api_key.ok_or(LlmError::MissingApiKey { backend: "openai" })?;
                let url = api_url.ok_or(LlmError::MissingApiUrl { backend: "openai" })?;
                Ok(Arc::new(OpenAiCompatibleClient::new(Some(key), model, &url, "openai", options)?))
            }
            BackendType::Llama => {
                let url = api_url.ok_or(LlmError::MissingApiUrl { backend: "llama" })?;
                Ok(Arc::new(OpenAiCompatibleClient::new(api_key, model, &url, "llama", options)?))
            }
        }
    }
}
