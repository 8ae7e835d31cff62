use agentchat_toolcore::ToolParameters;

/// Help listing printed for unknown or malformed slash commands
pub const HELP_TEXT: &str = "\
Available tools:
  /tools
  /file read|write|list <path> [content]
  /search <query>
  /text generate|rewrite|brainstorm|research <content>
  /image generate|edit|thumbnail <prompt>
  /video text_to_video|animate|edit <content>
  /audio tts|podcast|audiobook <text>
  /workflow plan|schedule|collaborate|review <content>
  /seo optimize|analyze|keywords|meta <content>
  /social post|schedule|analytics|hashtags <content>";

/// A parsed `/command`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    /// Call a tool directly with these parameters
    Invoke { tool: String, params: ToolParameters },
    /// List registered tools with their parameter signatures
    ListTools,
    Help,
}

/// Parse a line starting with `/` into a direct tool call.
///
/// Positional words map onto the tool's parameters; the trailing words are
/// joined with single spaces into the free-text parameter.
pub fn parse_slash_command(line: &str) -> SlashCommand {
    let body = line.trim().strip_prefix('/').unwrap_or(line);
    let parts: Vec<&str> = body.split_whitespace().collect();
    let rest = |from: usize| parts.get(from..).map(|words| words.join(" ")).unwrap_or_default();

    let Some(&tool) = parts.first() else {
        return SlashCommand::Help;
    };

    if tool == "tools" {
        return SlashCommand::ListTools;
    }

    let params = match tool {
        "file" if parts.len() >= 3 => ToolParameters::new()
            .with("action", parts[1])
            .with("path", parts[2])
            .with("content", rest(3)),
        "search" if parts.len() >= 2 => ToolParameters::new().with("query", rest(1)),
        "text" if parts.len() >= 2 => ToolParameters::new()
            .with("task", parts[1])
            .with("content", rest(2)),
        "image" if parts.len() >= 2 => ToolParameters::new()
            .with("action", parts[1])
            .with("prompt", rest(2)),
        "audio" if parts.len() >= 2 => ToolParameters::new()
            .with("action", parts[1])
            .with("text", rest(2)),
        "video" | "workflow" | "seo" | "social" if parts.len() >= 2 => ToolParameters::new()
            .with("action", parts[1])
            .with("content", rest(2)),
        _ => return SlashCommand::Help,
    };

    SlashCommand::Invoke {
        tool: tool.to_string(),
        params,
    }
}
