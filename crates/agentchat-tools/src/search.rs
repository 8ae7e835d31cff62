use agentchat_toolcore::{param, ParameterDefinition, Tool, ToolContext, ToolParameters, ToolResult};
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;
use std::fs;

use crate::file_ops::relative_display;

const MAX_RESULTS: usize = 50;

/// Tool for case-insensitive text search across files in the work directory
pub struct SearchTool;

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        "search"
    }

    fn description(&self) -> &str {
        "Search for text across files in the working directory"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([
            param!("query", "Text to search for (case-insensitive)", required),
            param!("pattern", "Glob limiting which files are searched", optional, "*"),
        ])
    }

    async fn execute(&self, params: ToolParameters, context: &ToolContext) -> ToolResult {
        let query = match params.get_required("query") {
            Ok(query) => query,
            Err(e) => return ToolResult::error(e.to_string()),
        };
        let pattern = params.get_or("pattern", "*");

        if query.trim().is_empty() {
            return ToolResult::error("Search query must not be empty".to_string());
        }

        let search_regex = match Regex::new(&format!("(?i){}", regex::escape(query.trim()))) {
            Ok(regex) => regex,
            Err(e) => return ToolResult::error(format!("Invalid search query: {}", e)),
        };

        let glob_matcher = match glob::Pattern::new(&pattern) {
            Ok(matcher) => matcher,
            Err(e) => return ToolResult::error(format!("Invalid glob pattern: {}", e)),
        };

        let mut builder = ignore::WalkBuilder::new(&context.work_dir);
        builder.hidden(false).git_ignore(true).git_exclude(true);

        let mut results = Vec::new();
        let mut files_searched = 0;

        'files: for entry in builder.build().filter_map(|entry| entry.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative_path = match relative_display(&context.work_dir, path) {
                Some(relative_path) if glob_matcher.matches(&relative_path) => relative_path,
                _ => continue,
            };

            // Skip files that can't be read as text
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(_) => continue,
            };
            files_searched += 1;

            for (line_num, line) in content.lines().enumerate() {
                if search_regex.is_match(line) {
                    results.push(format!("{}:{}:{}", relative_path, line_num + 1, line.trim()));
                    if results.len() >= MAX_RESULTS {
                        break 'files;
                    }
                }
            }
        }

        let output = if results.is_empty() {
            format!("No matches found for '{}' in {} files", query, files_searched)
        } else {
            let truncated = if results.len() >= MAX_RESULTS {
                format!(" (showing first {} results)", MAX_RESULTS)
            } else {
                String::new()
            };
            format!(
                "Found {} matches for '{}' in {} files{}:\n{}",
                results.len(),
                query,
                files_searched,
                truncated,
                results.join("\n")
            )
        };

        ToolResult::success(output)
    }
}
