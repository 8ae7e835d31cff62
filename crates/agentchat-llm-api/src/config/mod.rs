use std::time::Duration;

pub mod factory;
pub use factory::ClientFactory;

/// Backend type for the generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    Gemini,
    OpenAI,
    Llama,
}

impl BackendType {
    /// Parse backend type from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Some(Self::Gemini),
            "openai" => Some(Self::OpenAI),
            "llama" | "llamacpp" | "llama.cpp" | "llama-cpp" => Some(Self::Llama),
            _ => None,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAI => "openai",
            Self::Llama => "llama",
        }
    }
}

impl std::fmt::Display for BackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default Gemini API base URL
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default OpenAI API URL
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LLAMA_MODEL: &str = "default";

/// Get the default URL for a given backend type
pub fn get_default_url_for_backend(backend: BackendType) -> Option<&'static str> {
    match backend {
        BackendType::Gemini => Some(GEMINI_API_URL),
        BackendType::OpenAI => Some(OPENAI_API_URL),
        BackendType::Llama => None, // llama.cpp has no default URL
    }
}

pub fn get_default_model_for_backend(backend: BackendType) -> &'static str {
    match backend {
        BackendType::Gemini => DEFAULT_GEMINI_MODEL,
        BackendType::OpenAI => DEFAULT_OPENAI_MODEL,
        BackendType::Llama => DEFAULT_LLAMA_MODEL,
    }
}

/// Transport options shared by every backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Dump request and response bodies to the console
    pub verbose: bool,
}

/// Normalize API URL by ensuring it has the correct path for OpenAI-compatible endpoints
pub fn normalize_api_url(url: &str) -> String {
    // If URL already contains a path with "completions", use it as-is
    if url.contains("/completions") || url.contains("/chat") {
        return url.to_string();
    }

    // If URL ends with a slash, append path without leading slash
    if url.ends_with('/') {
        format!("{}v1/chat/completions", url)
    } else {
        format!("{}/v1/chat/completions", url)
    }
}
