use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;

use agentchat_chat::ChatSession;
use agentchat_llm_api::{ClientFactory, LlmClient};
use agentchat_logging::{status, trace, warn, ConversationLogger};
use agentchat_tools::initialize_tool_registry;

use crate::config::AppConfig;

/// Report which provider keys were found in the environment
pub fn print_key_status(config: &AppConfig) {
    if config.gemini_key_found {
        println!("{}", "✓ Gemini API key found".green());
    }
    if config.openai_key_found {
        println!("{}", "✓ OpenAI API key found".green());
    }
    if !config.is_live() {
        warn(&format!(
            "No API key for the {} backend; replies will only list the available tools",
            config.backend
        ));
    }
}

/// Build the model client, or `None` for fallback mode
pub fn create_client(config: &AppConfig) -> Result<Option<Arc<dyn LlmClient>>> {
    if !config.is_live() {
        return Ok(None);
    }

    let client = ClientFactory::create(
        config.backend,
        config.api_key.clone(),
        config.model.clone(),
        config.api_url.clone(),
        &config.client_options(),
    )?;
    Ok(Some(client))
}

/// Assemble the chat session: tools, client, and the optional transcript
pub async fn build_session(config: &AppConfig) -> Result<ChatSession> {
    let registry = initialize_tool_registry();
    let client = create_client(config)?;

    if let Some(client) = &client {
        status("🧠", &format!("Using {} model {}", client.backend_name(), client.model().bright_magenta()));
    }
    if let Some(timeout) = config.timeout {
        trace(&format!("Model requests time out after {}s", timeout.as_secs()));
    }

    let mut session = ChatSession::new(registry, client, config.work_dir.clone())?;

    if config.log_conversation {
        match ConversationLogger::new(&config.work_dir).await {
            Ok(logger) => {
                trace(&format!("Logging conversation to {}", logger.file_path().display()));
                session = session.with_logger(logger);
            }
            Err(e) => warn(&format!("Logging disabled: {}", e)),
        }
    }

    println!("Initialized {}", config.name);
    Ok(session)
}
