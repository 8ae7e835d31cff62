//! Conversation state, the tool-call directive protocol, and the chat orchestrator.

pub mod directive;
pub mod history;
pub mod prompt;
pub mod session;

pub use directive::{parse_params, Directive, DirectiveScanner};
pub use history::{ConversationHistory, Message, Role};
pub use prompt::{build_prompt, HISTORY_WINDOW};
pub use session::ChatSession;
