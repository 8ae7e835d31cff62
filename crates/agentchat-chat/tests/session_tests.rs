use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use agentchat_chat::{ChatSession, DirectiveScanner, Role};
use agentchat_llm_api::{LlmClient, LlmError};
use agentchat_toolcore::{param, ParameterDefinition, Tool, ToolContext, ToolParameters, ToolRegistry, ToolResult};
use agentchat_tools::register_default_tools;

/// Replies with canned text and remembers the prompts it was sent
struct ScriptedClient {
    reply: std::result::Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(LlmError::Api {
                backend: "gemini",
                status: 503,
                message: message.clone(),
            }
            .into()),
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }

    fn backend_name(&self) -> &'static str {
        "gemini"
    }
}

/// Counts how often it runs
struct CountingTool {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Tool for CountingTool {
    fn name(&self) -> &str {
        "count"
    }

    fn description(&self) -> &str {
        "Counts invocations"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([param!("label", "Label", optional, "")])
    }

    async fn execute(&self, params: ToolParameters, _context: &ToolContext) -> ToolResult {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        ToolResult::success(format!("call {} for {}", n, params.get_or("label", "")))
    }
}

fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::quiet();
    register_default_tools(&mut registry);
    registry
}

fn session_with(client: Option<Arc<dyn LlmClient>>, dir: &TempDir) -> ChatSession {
    ChatSession::new(default_registry(), client, dir.path().to_path_buf()).unwrap()
}

#[tokio::test]
async fn test_fallback_lists_tools() {
    let dir = TempDir::new().unwrap();
    let mut session = session_with(None, &dir);

    let reply = session.chat("hello").await;

    assert_eq!(
        reply,
        "No API key configured. Available tools: text, image, video, audio, workflow, seo, social, file, search"
    );
    assert_eq!(session.history().len(), 2);
    assert!(!session.has_client());
}

#[tokio::test]
async fn test_sunset_example() {
    let dir = TempDir::new().unwrap();
    let client = ScriptedClient::replying("Here you go: TOOL_CALL[image:action=generate,prompt=sunset]");
    let mut session = session_with(Some(client.clone()), &dir);

    let reply = session.chat("make an image of a sunset").await;

    assert!(reply.contains("Generated realistic image: 'sunset'"));
    assert!(reply.contains("**Tool Result (image):**"));
    assert!(!reply.contains("TOOL_CALL["));

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("- image: "));
    assert!(prompts[0].ends_with("user: make an image of a sunset\n\nUser: make an image of a sunset\nAssistant:"));
}

#[tokio::test]
async fn test_history_grows_by_two_per_turn() {
    let dir = TempDir::new().unwrap();
    let client = ScriptedClient::replying("plain answer");
    let mut session = session_with(Some(client), &dir);

    for turn in 1..=4 {
        session.chat(&format!("message {}", turn)).await;
        assert_eq!(session.history().len(), turn * 2);
    }

    let last = &session.history().messages()[7];
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.content, "plain answer");
}

#[tokio::test]
async fn test_prompt_window_is_last_five_messages() {
    let dir = TempDir::new().unwrap();
    let client = ScriptedClient::replying("ok");
    let mut session = session_with(Some(client.clone()), &dir);

    for turn in 1..=4 {
        session.chat(&format!("message {}", turn)).await;
    }

    let prompt = client.prompts().pop().unwrap();
    let history = prompt.split("Conversation History:\n").nth(1).unwrap();
    assert_eq!(
        history,
        "user: message 2\nassistant: ok\nuser: message 3\nassistant: ok\nuser: message 4\n\nUser: message 4\nAssistant:"
    );
}

#[tokio::test]
async fn test_api_error_becomes_reply() {
    let dir = TempDir::new().unwrap();
    let client = ScriptedClient::failing("model overloaded");
    let mut session = session_with(Some(client), &dir);

    let reply = session.chat("hello").await;

    assert!(reply.starts_with("Error with Gemini API: gemini API error (503): model overloaded"));
    assert!(reply.ends_with("\nAvailable tools: text, image, video, audio, workflow, seo, social, file, search"));
    assert_eq!(session.history().len(), 2);
}

#[tokio::test]
async fn test_unknown_tool_is_reported_inline() {
    let dir = TempDir::new().unwrap();
    let client = ScriptedClient::replying("TOOL_CALL[weather:city=London]");
    let mut session = session_with(Some(client), &dir);

    let reply = session.chat("weather?").await;

    assert_eq!(reply, "\n**Tool Result (weather):** Tool 'weather' not found\n");
}

#[tokio::test]
async fn test_missing_required_parameter_is_tool_error() {
    let dir = TempDir::new().unwrap();
    let client = ScriptedClient::replying("Sure TOOL_CALL[image:prompt=cat] and more");
    let mut session = session_with(Some(client), &dir);

    let reply = session.chat("cat picture").await;

    assert!(reply.starts_with("Sure \n**Tool Error (image):** image: "));
    assert!(reply.contains("action"));
    assert!(reply.ends_with("\n and more"));
}

#[tokio::test]
async fn test_two_distinct_directives_are_both_replaced() {
    let dir = TempDir::new().unwrap();
    let client = ScriptedClient::replying(
        "A: TOOL_CALL[image:action=thumbnail,prompt=cats] B: TOOL_CALL[social:action=hashtags,content=cats]",
    );
    let mut session = session_with(Some(client), &dir);

    let reply = session.chat("promote my cat video").await;

    assert!(reply.contains("**Tool Result (image):**"));
    assert!(reply.contains("**Tool Result (social):**"));
    assert!(!reply.contains("TOOL_CALL["));
}

#[tokio::test]
async fn test_identical_directives_are_each_invoked_but_show_first_result() {
    let dir = TempDir::new().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut registry = ToolRegistry::quiet();
    registry.register(CountingTool { calls: calls.clone() });

    let scanner = DirectiveScanner::new().unwrap();
    let context = ToolContext::new(dir.path().to_path_buf(), "test".to_string());
    let reply = scanner
        .process(
            "TOOL_CALL[count:label=x] then TOOL_CALL[count:label=x] then TOOL_CALL[count:label=y]",
            &registry,
            &context,
        )
        .await;

    assert_eq!(
        reply,
        "\n**Tool Result (count):** call 1 for x\n then \n**Tool Result (count):** call 1 for x\n then \n**Tool Result (count):** call 3 for y\n"
    );
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_tool_error_does_not_stop_later_directives() {
    let dir = TempDir::new().unwrap();
    let client = ScriptedClient::replying("TOOL_CALL[image:prompt=x] TOOL_CALL[image:action=edit,prompt=y]");
    let mut session = session_with(Some(client), &dir);

    let reply = session.chat("edit my photo").await;

    assert_eq!(
        reply,
        "\n**Tool Error (image):** image: Required parameter(s) missing: action\n \n**Tool Result (image):** Edited image with prompt: 'y'\n"
    );
}

#[tokio::test]
async fn test_reply_without_directive_is_unchanged() {
    let dir = TempDir::new().unwrap();
    let text = "Nothing to do here. TOOL_CALL[image:] stays literal.";
    let client = ScriptedClient::replying(text);
    let mut session = session_with(Some(client), &dir);

    assert_eq!(session.chat("hi").await, text);
}

#[tokio::test]
async fn test_invoke_tool_bypasses_model() {
    let dir = TempDir::new().unwrap();
    let client = ScriptedClient::replying("unused");
    let session = session_with(Some(client.clone()), &dir);

    let result = session
        .invoke_tool(
            "text",
            ToolParameters::new().with("task", "brainstorm").with("content", "podcast names"),
        )
        .await;

    assert!(result.success);
    assert!(client.prompts().is_empty());
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_transcript_logging() {
    let dir = TempDir::new().unwrap();
    let logger = agentchat_logging::ConversationLogger::new(dir.path()).await.unwrap();
    let log_path = logger.file_path().to_path_buf();

    let mut session = session_with(None, &dir).with_logger(logger);
    session.chat("hello").await;

    let contents = tokio::fs::read_to_string(&log_path).await.unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(r#""role":"user""#));
    assert!(lines[1].contains(r#""role":"assistant""#));
    let session_field = format!(r#""session_id":"{}""#, session.context().session_id);
    assert!(lines.iter().all(|line| line.contains(&session_field)));
}
