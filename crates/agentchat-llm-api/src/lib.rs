//! # agentchat-llm-api
//!
//! A small interface over hosted text-generation services:
//! - Google Gemini (`generateContent`)
//! - OpenAI and other OpenAI-compatible endpoints (including a llama.cpp server)
//!
//! ## Example
//!
//! ```rust,no_run
//! use agentchat_llm_api::{BackendType, ClientFactory, ClientOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ClientFactory::create(
//!         BackendType::Gemini,
//!         Some("your-api-key".to_string()),
//!         None,
//!         None,
//!         &ClientOptions::default(),
//!     )?;
//!
//!     let reply = client.generate("Hello!").await?;
//!     println!("Response: {}", reply);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use client::{ChatMessage, LlmClient};
pub use client::gemini::GeminiClient;
pub use client::openai::OpenAiCompatibleClient;

pub use config::{
    BackendType,
    ClientFactory,
    ClientOptions,
    GEMINI_API_URL,
    OPENAI_API_URL,
    DEFAULT_GEMINI_MODEL,
    DEFAULT_OPENAI_MODEL,
    DEFAULT_LLAMA_MODEL,
    normalize_api_url,
    get_default_url_for_backend,
    get_default_model_for_backend,
};

pub use error::LlmError;
