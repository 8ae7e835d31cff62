use agentchat_toolcore::{param, ParameterDefinition, Tool, ToolContext, ToolParameters, ToolResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const MAX_READ_CHARS: usize = 4000;
const MAX_LISTED_FILES: usize = 200;

/// Tool for reading, writing and listing files inside the work directory
pub struct FileTool;

#[async_trait]
impl Tool for FileTool {
    fn name(&self) -> &str {
        "file"
    }

    fn description(&self) -> &str {
        "Read, write, and list files in the working directory"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([
            param!("action", "One of: read, write, list", required),
            param!("path", "Path relative to the working directory", optional, "."),
            param!("content", "Content to write (write only)", optional, ""),
        ])
    }

    async fn execute(&self, params: ToolParameters, context: &ToolContext) -> ToolResult {
        let action = match params.get_required("action") {
            Ok(action) => action,
            Err(e) => return ToolResult::error(e.to_string()),
        };
        let path = params.get_or("path", ".");

        match action.as_str() {
            "read" => read_file(context, &path),
            "write" => write_file(context, &path, &params.get_or("content", "")),
            "list" => list_files(context, &path),
            other => ToolResult::success(format!("Unknown file action: {}", other)),
        }
    }
}

fn read_file(context: &ToolContext, path: &str) -> ToolResult {
    let full_path = match context.resolve_path(path) {
        Ok(full_path) => full_path,
        Err(e) => return ToolResult::error(e.to_string()),
    };

    if !full_path.is_file() {
        return ToolResult::error(format!("File not found: {}", path));
    }

    match fs::read_to_string(&full_path) {
        Ok(content) => {
            let total_chars = content.chars().count();
            if total_chars > MAX_READ_CHARS {
                let preview: String = content.chars().take(MAX_READ_CHARS).collect();
                ToolResult::success(format!(
                    "Contents of {} (first {} of {} characters):\n{}",
                    path, MAX_READ_CHARS, total_chars, preview
                ))
            } else {
                ToolResult::success(format!("Contents of {}:\n{}", path, content))
            }
        }
        Err(e) => ToolResult::error(format!("Failed to read file: {}", e)),
    }
}

fn write_file(context: &ToolContext, path: &str, content: &str) -> ToolResult {
    let full_path = match context.resolve_path(path) {
        Ok(full_path) => full_path,
        Err(e) => return ToolResult::error(e.to_string()),
    };

    if full_path.is_dir() {
        return ToolResult::error(format!("Cannot write to a directory: {}", path));
    }

    // Create parent directories if they don't exist
    if let Some(parent) = full_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            return ToolResult::error(format!("Failed to create directories: {}", e));
        }
    }

    match fs::write(&full_path, content) {
        Ok(()) => ToolResult::success(format!("Wrote {} bytes to {}", content.len(), path)),
        Err(e) => ToolResult::error(format!("Failed to write file: {}", e)),
    }
}

fn list_files(context: &ToolContext, path: &str) -> ToolResult {
    let root = match context.resolve_path(path) {
        Ok(root) => root,
        Err(e) => return ToolResult::error(e.to_string()),
    };

    if !root.is_dir() {
        return ToolResult::error(format!("Not a directory: {}", path));
    }

    // Use ignore crate's WalkBuilder which respects .gitignore
    let mut builder = ignore::WalkBuilder::new(&root);
    builder.hidden(false).git_ignore(true).git_exclude(true);

    let mut files: Vec<String> = builder
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| relative_display(&context.work_dir, entry.path()))
        .collect();
    files.sort();

    if files.is_empty() {
        return ToolResult::success(format!("No files found in {}", path));
    }

    let total = files.len();
    files.truncate(MAX_LISTED_FILES);
    let note = if total > MAX_LISTED_FILES {
        format!(" (showing first {})", MAX_LISTED_FILES)
    } else {
        String::new()
    };

    ToolResult::success(format!(
        "Found {} file(s) in {}{}:\n{}",
        total,
        path,
        note,
        files.join("\n")
    ))
}

pub(crate) fn relative_display(work_dir: &Path, path: &Path) -> Option<String> {
    path.strip_prefix(work_dir)
        .ok()
        .and_then(|relative| relative.to_str())
        .map(|s| s.to_string())
}
