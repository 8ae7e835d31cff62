// Logging module - operator trace lines, request logging, conversation transcripts
pub mod conversation_logger;
pub mod request_logger;

use colored::Colorize;

pub use conversation_logger::ConversationLogger;
pub use request_logger::{log_request, log_response};

/// Print a dim trace line to the operator console
pub fn trace(message: &str) {
    println!("{}", message.bright_black());
}

/// Print a status line prefixed with an icon
pub fn status(icon: &str, message: &str) {
    println!("{} {}", icon, message);
}

/// Print a warning to stderr
pub fn warn(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message.yellow());
}

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Mask an API key for display, keeping a short prefix
pub fn mask_key(api_key: &str) -> String {
    format!("{}***", api_key.chars().take(6).collect::<String>())
}
