use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use agentchat_llm_api::LlmClient;
use agentchat_logging::ConversationLogger;
use agentchat_toolcore::{ToolContext, ToolParameters, ToolRegistry, ToolResult};

use crate::directive::DirectiveScanner;
use crate::history::{ConversationHistory, Message, Role};
use crate::prompt::{build_prompt, HISTORY_WINDOW};

/// One interactive conversation: tools, history, and an optional model client.
///
/// Without a client the session runs in fallback mode and never touches the network.
pub struct ChatSession {
    registry: ToolRegistry,
    history: ConversationHistory,
    client: Option<Arc<dyn LlmClient>>,
    context: ToolContext,
    scanner: DirectiveScanner,
    logger: Option<ConversationLogger>,
}

impl ChatSession {
    pub fn new(registry: ToolRegistry, client: Option<Arc<dyn LlmClient>>, work_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            registry,
            history: ConversationHistory::new(),
            client,
            context: ToolContext::new(work_dir, uuid::Uuid::new_v4().to_string()),
            scanner: DirectiveScanner::new()?,
            logger: None,
        })
    }

    /// Record every message to a JSONL transcript
    pub fn with_logger(mut self, logger: ConversationLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn context(&self) -> &ToolContext {
        &self.context
    }

    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Send one user message and return the reply shown to the user.
    ///
    /// Model failures become part of the reply; this never fails.
    pub async fn chat(&mut self, user_message: &str) -> String {
        self.record(Message::user(user_message)).await;

        let reply = match self.client.clone() {
            Some(client) => {
                let prompt = build_prompt(&self.registry, self.history.recent(HISTORY_WINDOW), user_message);
                match client.generate(&prompt).await {
                    Ok(raw) => self.scanner.process(raw.trim(), &self.registry, &self.context).await,
                    Err(e) => format!(
                        "Error with {} API: {}\nAvailable tools: {}",
                        display_backend(client.backend_name()),
                        e,
                        self.tool_list()
                    ),
                }
            }
            None => format!("No API key configured. Available tools: {}", self.tool_list()),
        };

        self.record(Message::assistant(reply.clone())).await;
        reply
    }

    /// Call a tool directly, bypassing the model and directive handling
    pub async fn invoke_tool(&self, name: &str, params: ToolParameters) -> ToolResult {
        self.registry.execute_tool(name, params, &self.context).await
    }

    fn tool_list(&self) -> String {
        self.registry.get_tool_names().join(", ")
    }

    async fn record(&mut self, message: Message) {
        if let Some(logger) = self.logger.as_mut() {
            let model = match message.role {
                Role::Assistant => self.client.as_ref().map(|client| client.model()),
                Role::User => None,
            };
            logger
                .log(&self.context.session_id, message.role.as_str(), &message.content, model)
                .await;
        }
        self.history.push(message);
    }
}

fn display_backend(name: &str) -> String {
    match name {
        "openai" => "OpenAI".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
