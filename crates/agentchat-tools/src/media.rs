use agentchat_toolcore::{param, ParameterDefinition, Tool, ToolContext, ToolParameters, ToolResult};
use async_trait::async_trait;
use std::collections::HashMap;

/// Tool for video generation and editing (placeholder output)
pub struct VideoGenerationTool;

#[async_trait]
impl Tool for VideoGenerationTool {
    fn name(&self) -> &str {
        "video"
    }

    fn description(&self) -> &str {
        "Generate videos from text and images"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([
            param!("action", "One of: text_to_video, animate, edit", required),
            param!("content", "Script, image or clip description", optional, ""),
            param!("duration", "Target length, e.g. 30s", optional, "30s"),
        ])
    }

    async fn execute(&self, params: ToolParameters, _context: &ToolContext) -> ToolResult {
        let action = match params.get_required("action") {
            Ok(action) => action,
            Err(e) => return ToolResult::error(e.to_string()),
        };
        let content = params.get_or("content", "");
        let duration = params.get_or("duration", "30s");

        let output = match action.as_str() {
            "text_to_video" => format!(
                "Generated {} video from text: '{}' (placeholder - integrate with a video model)",
                duration, content
            ),
            "animate" => format!("Animated image/avatar: '{}'", content),
            "edit" => format!("Edited video: '{}'", content),
            other => format!("Unknown video action: {}", other),
        };

        ToolResult::success(output)
    }
}

/// Tool for text-to-speech and audio generation (placeholder output)
pub struct AudioTool;

#[async_trait]
impl Tool for AudioTool {
    fn name(&self) -> &str {
        "audio"
    }

    fn description(&self) -> &str {
        "Generate speech and audio content"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([
            param!("action", "One of: tts, podcast, audiobook", required),
            param!("text", "Text to voice", optional, ""),
            param!("voice", "Voice preset", optional, "default"),
        ])
    }

    async fn execute(&self, params: ToolParameters, _context: &ToolContext) -> ToolResult {
        let action = match params.get_required("action") {
            Ok(action) => action,
            Err(e) => return ToolResult::error(e.to_string()),
        };
        let text = params.get_or("text", "");
        let voice = params.get_or("voice", "default");

        let output = match action.as_str() {
            "tts" => format!(
                "Generated {} voice audio: '{}' (placeholder - integrate with a TTS service)",
                voice, text
            ),
            "podcast" => format!("Created podcast segment: '{}'", text),
            "audiobook" => format!("Generated audiobook narration: '{}'", text),
            other => format!("Unknown audio action: {}", other),
        };

        ToolResult::success(output)
    }
}
