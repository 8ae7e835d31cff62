use agentchat_toolcore::{param, ParameterDefinition, Tool, ToolContext, ToolParameters, ToolResult};
use async_trait::async_trait;
use std::collections::HashMap;

/// Tool for text generation and writing tasks
pub struct TextGenerationTool;

#[async_trait]
impl Tool for TextGenerationTool {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Generate, rewrite, and brainstorm text content"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([
            param!("task", "One of: generate, rewrite, brainstorm, research", required),
            param!("content", "Subject or source text", optional, ""),
            param!("style", "Writing style", optional, "professional"),
        ])
    }

    async fn execute(&self, params: ToolParameters, _context: &ToolContext) -> ToolResult {
        let task = match params.get_required("task") {
            Ok(task) => task,
            Err(e) => return ToolResult::error(e.to_string()),
        };
        let content = params.get_or("content", "");
        let style = params.get_or("style", "professional");

        let output = match task.as_str() {
            "generate" => format!("Generated {} content: {}", style, content),
            "rewrite" => format!("Rewritten in {} style: {}", style, content),
            "brainstorm" => format!("Brainstorming ideas for: {}", content),
            "research" => format!("Research summary for: {}", content),
            other => format!("Unknown text task: {}", other),
        };

        ToolResult::success(output)
    }
}

/// Tool for image generation and editing (placeholder output)
pub struct ImageGenerationTool;

#[async_trait]
impl Tool for ImageGenerationTool {
    fn name(&self) -> &str {
        "image"
    }

    fn description(&self) -> &str {
        "Generate and edit images using AI"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([
            param!("action", "One of: generate, edit, thumbnail", required),
            param!("prompt", "What the image should show", optional, ""),
            param!("style", "Visual style", optional, "realistic"),
        ])
    }

    async fn execute(&self, params: ToolParameters, _context: &ToolContext) -> ToolResult {
        let action = match params.get_required("action") {
            Ok(action) => action,
            Err(e) => return ToolResult::error(e.to_string()),
        };
        let prompt = params.get_or("prompt", "");
        let style = params.get_or("style", "realistic");

        let output = match action.as_str() {
            "generate" => format!(
                "Generated {} image: '{}' (placeholder - integrate with an image model)",
                style, prompt
            ),
            "edit" => format!("Edited image with prompt: '{}'", prompt),
            "thumbnail" => format!("Created thumbnail for: '{}'", prompt),
            other => format!("Unknown image action: {}", other),
        };

        ToolResult::success(output)
    }
}
