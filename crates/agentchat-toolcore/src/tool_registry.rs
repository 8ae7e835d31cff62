use std::collections::HashMap;
use std::sync::Arc;

use agentchat_logging::trace;

use super::tool::{Tool, ToolParameters, ToolResult};
use super::tool_context::ToolContext;

/// Registry for managing and dispatching tools by name
#[derive(Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    order: Vec<String>,
    quiet: bool,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.order)
            .field("quiet", &self.quiet)
            .finish()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            order: Vec::new(),
            quiet: false,
        }
    }

    /// A registry that does not print trace lines
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::new()
        }
    }

    /// Register a new tool. A tool with the same name is replaced in place.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.register_arc(Arc::new(tool));
    }

    pub fn register_arc(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_none() {
            self.order.push(name.clone());
        }
        if !self.quiet {
            trace(&format!("Added tool: {}", name));
        }
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Get all tools, in registration order
    pub fn get_all_tools(&self) -> Vec<Arc<dyn Tool>> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .cloned()
            .collect()
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get tool names, in registration order
    pub fn get_tool_names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// `name: description` lines, in registration order
    pub fn descriptions(&self) -> Vec<String> {
        self.get_all_tools()
            .iter()
            .map(|tool| format!("{}: {}", tool.name(), tool.description()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Execute a tool by name.
    ///
    /// An unknown name is reported as a successful result saying the tool was
    /// not found; bad parameters are reported as an error result.
    pub async fn execute_tool(
        &self,
        name: &str,
        params: ToolParameters,
        context: &ToolContext,
    ) -> ToolResult {
        let tool = match self.get_tool(name) {
            Some(tool) => tool,
            None => return ToolResult::success(format!("Tool '{}' not found", name)),
        };

        if !self.quiet {
            trace(&format!("Using tool: {}", name));
        }

        match params.resolve(&tool.parameters()) {
            Ok(params) => tool.execute(params, context).await,
            Err(e) => ToolResult::error(format!("{}: {}", name, e)),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
