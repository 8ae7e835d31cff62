use agentchat_toolcore::{param, ParameterDefinition, Tool, ToolContext, ToolParameters, ToolResult};
use async_trait::async_trait;
use std::collections::HashMap;

/// Tool for content planning and workflow management
pub struct ContentWorkflowTool;

#[async_trait]
impl Tool for ContentWorkflowTool {
    fn name(&self) -> &str {
        "workflow"
    }

    fn description(&self) -> &str {
        "Manage content calendar and project workflows"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([
            param!("action", "One of: plan, schedule, collaborate, review", required),
            param!("content", "Content item or project", optional, ""),
            param!("date", "Date for scheduling", optional, ""),
        ])
    }

    async fn execute(&self, params: ToolParameters, _context: &ToolContext) -> ToolResult {
        let action = match params.get_required("action") {
            Ok(action) => action,
            Err(e) => return ToolResult::error(e.to_string()),
        };
        let content = params.get_or("content", "");
        let date = params.get_or("date", "");

        let output = match action.as_str() {
            "plan" => format!("Created content plan: '{}'", content),
            "schedule" => format!("Scheduled content for {}: '{}'", date, content),
            "collaborate" => format!("Set up collaboration for: '{}'", content),
            "review" => format!("Content review cycle started for: '{}'", content),
            other => format!("Unknown workflow action: {}", other),
        };

        ToolResult::success(output)
    }
}

/// Tool for SEO optimization and content analysis
pub struct SeoTool;

#[async_trait]
impl Tool for SeoTool {
    fn name(&self) -> &str {
        "seo"
    }

    fn description(&self) -> &str {
        "Optimize content for search engines"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([
            param!("action", "One of: optimize, analyze, keywords, meta", required),
            param!("content", "Content to work on", optional, ""),
            param!("keywords", "Target keywords", optional, ""),
        ])
    }

    async fn execute(&self, params: ToolParameters, _context: &ToolContext) -> ToolResult {
        let action = match params.get_required("action") {
            Ok(action) => action,
            Err(e) => return ToolResult::error(e.to_string()),
        };
        let content = params.get_or("content", "");
        let keywords = params.get_or("keywords", "");

        let output = match action.as_str() {
            "optimize" => format!("SEO optimized content for keywords '{}': {}", keywords, content),
            "analyze" => format!("SEO analysis for: '{}'", content),
            "keywords" => format!("Keyword research for: '{}'", content),
            "meta" => format!("Generated meta description for: '{}'", content),
            other => format!("Unknown SEO action: {}", other),
        };

        ToolResult::success(output)
    }
}

/// Tool for social media distribution and management
pub struct SocialMediaTool;

#[async_trait]
impl Tool for SocialMediaTool {
    fn name(&self) -> &str {
        "social"
    }

    fn description(&self) -> &str {
        "Manage social media posting and analytics"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([
            param!("action", "One of: post, schedule, analytics, hashtags", required),
            param!("content", "Post text or topic", optional, ""),
            param!("platform", "Target platform", optional, "all"),
        ])
    }

    async fn execute(&self, params: ToolParameters, _context: &ToolContext) -> ToolResult {
        let action = match params.get_required("action") {
            Ok(action) => action,
            Err(e) => return ToolResult::error(e.to_string()),
        };
        let content = params.get_or("content", "");
        let platform = params.get_or("platform", "all");

        let output = match action.as_str() {
            "post" => format!("Posted to {}: '{}'", platform, content),
            "schedule" => format!("Scheduled post for {}: '{}'", platform, content),
            "analytics" => format!("Analytics report for {}: '{}'", platform, content),
            "hashtags" => format!("Generated hashtags for: '{}'", content),
            other => format!("Unknown social media action: {}", other),
        };

        ToolResult::success(output)
    }
}
