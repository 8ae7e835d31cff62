use thiserror::Error;

/// Failures talking to a generation service
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{backend} API key is not configured")]
    MissingApiKey { backend: &'static str },

    #[error("{backend} backend requires an API URL")]
    MissingApiUrl { backend: &'static str },

    #[error("{backend} API error ({status}): {message}")]
    Api {
        backend: &'static str,
        status: u16,
        message: String,
    },

    #[error("{backend} returned no text")]
    EmptyResponse { backend: &'static str },

    #[error("prompt blocked by {backend}: {reason}")]
    Blocked { backend: &'static str, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Pull a human-readable message out of an error body, falling back to the raw text
pub(crate) fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| body.trim().to_string())
}
