//! Capabilities exposed to the model and to the interactive shell.
//!
//! The content tools (text, image, video, audio, workflow, seo, social) are
//! placeholders that describe what they would do. `file` and `search` work
//! against the session's working directory.

pub mod content;
pub mod file_ops;
pub mod media;
pub mod publishing;
pub mod search;

pub use content::*;
pub use file_ops::*;
pub use media::*;
pub use publishing::*;
pub use search::*;

use agentchat_toolcore::ToolRegistry;

/// Register every built-in capability, content tools first
pub fn register_default_tools(registry: &mut ToolRegistry) {
    registry.register(TextGenerationTool);
    registry.register(ImageGenerationTool);
    registry.register(VideoGenerationTool);
    registry.register(AudioTool);
    registry.register(ContentWorkflowTool);
    registry.register(SeoTool);
    registry.register(SocialMediaTool);
    registry.register(FileTool);
    registry.register(SearchTool);
}

/// A registry holding the built-in capabilities
pub fn initialize_tool_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    register_default_tools(&mut registry);
    registry
}
