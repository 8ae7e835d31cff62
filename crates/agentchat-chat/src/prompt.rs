use agentchat_toolcore::ToolRegistry;

use crate::history::Message;

/// Number of trailing history entries included in each prompt
pub const HISTORY_WINDOW: usize = 5;

const HEADER: &str = "You are an AI content creation assistant with access to powerful tools. \
When a user requests something that would benefit from using a tool, automatically use it by \
including the tool call in your response.";

const DIRECTIVE_INSTRUCTIONS: &str = "\
IMPORTANT: When you decide to use a tool, format it as: TOOL_CALL[tool_name:parameter1=value1,parameter2=value2]

Examples:
- User asks \"search for weather in London\" → Use: TOOL_CALL[search:query=weather in London]
- User asks \"create a blog post about AI\" → Use: TOOL_CALL[text:task=generate,content=blog post about AI]
- User asks \"make an image of a sunset\" → Use: TOOL_CALL[image:action=generate,prompt=sunset]
- User asks \"read my notes.txt file\" → Use: TOOL_CALL[file:action=read,path=notes.txt]

Always be helpful and proactive. If a user's request can be fulfilled with a tool, use it automatically. \
Provide context about what you're doing and why.";

/// Compose the prompt sent to the model.
///
/// `recent` is the trailing history window and already ends with the
/// current user message; the message is repeated after it as the final turn.
pub fn build_prompt(registry: &ToolRegistry, recent: &[Message], user_message: &str) -> String {
    let tools = registry
        .descriptions()
        .into_iter()
        .map(|line| format!("- {}", line))
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = format!(
        "{}\n\nAvailable Tools:\n{}\n\n{}\n\nConversation History:\n",
        HEADER, tools, DIRECTIVE_INSTRUCTIONS
    );
    for message in recent {
        prompt.push_str(&format!("{}: {}\n", message.role, message.content));
    }
    prompt.push_str(&format!("\nUser: {}\nAssistant:", user_message));

    prompt
}
