use std::collections::HashMap;
use agentchat_toolcore::{param, ParameterDefinition, Tool, ToolContext, ToolParameters, ToolRegistry, ToolResult};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// Mock tool implementations for testing
#[derive(Debug, Clone)]
struct TestTool {
    name: String,
    description: String,
    parameters: HashMap<String, ParameterDefinition>,
    should_fail: bool,
}

impl TestTool {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters: HashMap::new(),
            should_fail: false,
        }
    }

    fn with_parameters(mut self, parameters: HashMap<String, ParameterDefinition>) -> Self {
        self.parameters = parameters;
        self
    }

    fn failing(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

#[async_trait::async_trait]
impl Tool for TestTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        self.parameters.clone()
    }

    async fn execute(&self, params: ToolParameters, _context: &ToolContext) -> ToolResult {
        if self.should_fail {
            ToolResult::error("Test tool failed intentionally".to_string())
        } else {
            let mut keys: Vec<String> = params.data.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            keys.sort();
            ToolResult::success(format!("Executed {} with [{}]", self.name, keys.join(",")))
        }
    }
}

fn create_test_context() -> (TempDir, ToolContext) {
    let temp_dir = TempDir::new().unwrap();
    let context = ToolContext::new(temp_dir.path().to_path_buf(), "test_session".to_string());
    (temp_dir, context)
}

#[tokio::test]
async fn test_registry_initialization() {
    let registry = ToolRegistry::quiet();
    assert_eq!(registry.get_all_tools().len(), 0);
    assert_eq!(registry.get_tool_names().len(), 0);
    assert!(registry.is_empty());
    assert!(!registry.has_tool("any_tool"));
}

#[tokio::test]
async fn test_single_tool_registration() {
    let mut registry = ToolRegistry::quiet();
    registry.register(TestTool::new("test_tool", "A test tool for testing"));

    assert!(registry.has_tool("test_tool"));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get_tool_names(), vec!["test_tool"]);
    assert_eq!(registry.get_tool("test_tool").unwrap().name(), "test_tool");
}

#[tokio::test]
async fn test_names_keep_registration_order() {
    let mut registry = ToolRegistry::quiet();
    registry.register(TestTool::new("text", "Text"));
    registry.register(TestTool::new("image", "Image"));
    registry.register(TestTool::new("audio", "Audio"));

    assert_eq!(registry.get_tool_names(), vec!["text", "image", "audio"]);
    assert_eq!(
        registry.descriptions(),
        vec!["text: Text", "image: Image", "audio: Audio"]
    );
}

#[tokio::test]
async fn test_duplicate_tool_registration() {
    let mut registry = ToolRegistry::quiet();
    registry.register(TestTool::new("duplicate_tool", "First instance"));
    registry.register(TestTool::new("other", "Other"));
    registry.register(TestTool::new("duplicate_tool", "Second instance"));

    // last registration wins, position is kept
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get_tool_names(), vec!["duplicate_tool", "other"]);
    let retrieved_tool = registry.get_tool("duplicate_tool").unwrap();
    assert_eq!(retrieved_tool.description(), "Second instance");
}

#[tokio::test]
async fn test_execute_unknown_tool_reports_not_found() {
    let registry = ToolRegistry::quiet();
    let (_dir, context) = create_test_context();

    let result = registry.execute_tool("nonexistent", ToolParameters::new(), &context).await;

    assert!(result.success);
    assert_eq!(result.content, "Tool 'nonexistent' not found");
}

#[tokio::test]
async fn test_execute_fills_defaults() {
    let mut registry = ToolRegistry::quiet();
    registry.register(TestTool::new("image", "Image").with_parameters(HashMap::from([
        param!("action", "Action", required),
        param!("style", "Style", optional, "realistic"),
    ])));
    let (_dir, context) = create_test_context();

    let params = ToolParameters::new().with("action", "generate");
    let result = registry.execute_tool("image", params, &context).await;

    assert!(result.success);
    assert_eq!(result.content, "Executed image with [action=generate,style=realistic]");
}

#[tokio::test]
async fn test_execute_rejects_bad_parameters() {
    let mut registry = ToolRegistry::quiet();
    registry.register(TestTool::new("image", "Image").with_parameters(HashMap::from([
        param!("action", "Action", required),
    ])));
    let (_dir, context) = create_test_context();

    let missing = registry.execute_tool("image", ToolParameters::new(), &context).await;
    assert!(!missing.success);
    assert!(missing.error.unwrap().contains("action"));

    let params = ToolParameters::from_pairs([("action", "generate"), ("bogus", "1")]);
    let unexpected = registry.execute_tool("image", params, &context).await;
    assert!(!unexpected.success);
    assert!(unexpected.error.unwrap().contains("bogus"));
}

#[tokio::test]
async fn test_execute_failing_tool() {
    let mut registry = ToolRegistry::quiet();
    registry.register(TestTool::new("broken", "Always fails").failing());
    let (_dir, context) = create_test_context();

    let result = registry.execute_tool("broken", ToolParameters::new(), &context).await;

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("Test tool failed intentionally"));
}

#[test]
fn test_signature_lists_required_first() {
    let tool = TestTool::new("image", "Image").with_parameters(HashMap::from([
        param!("style", "Style", optional, "realistic"),
        param!("action", "Action", required),
        param!("prompt", "Prompt", optional, ""),
    ]));

    assert_eq!(tool.signature(), "image(action, prompt='', style='realistic')");
}
