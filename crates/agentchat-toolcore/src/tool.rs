use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tool_context::ToolContext;

/// Tool parameters: named string values, as parsed from a directive or a slash command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolParameters {
    pub data: HashMap<String, String>,
}

impl ToolParameters {
    pub fn new() -> Self {
        Self { data: HashMap::new() }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            data: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn get_required(&self, key: &str) -> Result<String> {
        self.data
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Required parameter '{}' missing", key))
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.data
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check these parameters against a tool's definitions and fill in defaults.
    ///
    /// Fails on a name the tool does not declare or on a missing required parameter.
    pub fn resolve(mut self, definitions: &HashMap<String, ParameterDefinition>) -> Result<Self> {
        let mut unexpected: Vec<&String> = self
            .data
            .keys()
            .filter(|key| !definitions.contains_key(*key))
            .collect();
        if !unexpected.is_empty() {
            unexpected.sort();
            let names: Vec<&str> = unexpected.iter().map(|k| k.as_str()).collect();
            anyhow::bail!("Unexpected parameter(s): {}", names.join(", "));
        }

        let mut missing: Vec<&String> = definitions
            .iter()
            .filter(|(name, def)| def.required && !self.data.contains_key(*name))
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            missing.sort();
            let names: Vec<&str> = missing.iter().map(|k| k.as_str()).collect();
            anyhow::bail!("Required parameter(s) missing: {}", names.join(", "));
        }

        for (name, def) in definitions {
            if let Some(default) = &def.default {
                self.data.entry(name.clone()).or_insert_with(|| default.clone());
            }
        }

        Ok(self)
    }
}

/// Tool execution result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,
    pub content: String,
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success(content: String) -> Self {
        Self {
            success: true,
            content,
            error: None,
        }
    }

    pub fn error(error: String) -> Self {
        Self {
            success: false,
            content: String::new(),
            error: Some(error),
        }
    }

    /// Text shown to the operator: the content on success, the error message otherwise
    pub fn display_text(&self) -> &str {
        if self.success {
            &self.content
        } else {
            self.error.as_deref().unwrap_or("unknown error")
        }
    }
}

/// Tool parameter definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub description: String,
    pub required: bool,
    pub default: Option<String>,
}

/// Tool trait that all tools must implement
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name of the tool (must be unique)
    fn name(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str;

    /// Parameter definitions
    fn parameters(&self) -> HashMap<String, ParameterDefinition>;

    /// Execute the tool
    async fn execute(&self, params: ToolParameters, context: &ToolContext) -> ToolResult;

    /// One-line signature such as `image(action, prompt='', style='realistic')`
    fn signature(&self) -> String {
        let mut params: Vec<(String, ParameterDefinition)> = self.parameters().into_iter().collect();
        // required first, then alphabetical
        params.sort_by(|(a_name, a), (b_name, b)| {
            b.required.cmp(&a.required).then_with(|| a_name.cmp(b_name))
        });

        let rendered: Vec<String> = params
            .into_iter()
            .map(|(name, def)| match def.default {
                Some(default) if !def.required => format!("{}='{}'", name, default),
                _ => name,
            })
            .collect();

        format!("{}({})", self.name(), rendered.join(", "))
    }
}

/// Helper macro for creating parameter definitions
#[macro_export]
macro_rules! param {
    ($name:expr, $desc:expr, required) => {
        (
            $name.to_string(),
            $crate::ParameterDefinition {
                description: $desc.to_string(),
                required: true,
                default: None,
            }
        )
    };
    ($name:expr, $desc:expr, optional, $default:expr) => {
        (
            $name.to_string(),
            $crate::ParameterDefinition {
                description: $desc.to_string(),
                required: false,
                default: Some($default.to_string()),
            }
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_definitions() -> HashMap<String, ParameterDefinition> {
        HashMap::from([
            param!("action", "What to do", required),
            param!("prompt", "Image prompt", optional, ""),
            param!("style", "Visual style", optional, "realistic"),
        ])
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let params = ToolParameters::new().with("action", "generate");
        let resolved = params.resolve(&image_definitions()).unwrap();

        assert_eq!(resolved.get("action"), Some("generate"));
        assert_eq!(resolved.get("prompt"), Some(""));
        assert_eq!(resolved.get("style"), Some("realistic"));
    }

    #[test]
    fn test_resolve_keeps_supplied_values() {
        let params = ToolParameters::from_pairs([("action", "generate"), ("style", "watercolor")]);
        let resolved = params.resolve(&image_definitions()).unwrap();

        assert_eq!(resolved.get("style"), Some("watercolor"));
    }

    #[test]
    fn test_resolve_rejects_missing_required() {
        let params = ToolParameters::new().with("prompt", "sunset");
        let err = params.resolve(&image_definitions()).unwrap_err();

        assert!(err.to_string().contains("action"));
    }

    #[test]
    fn test_resolve_rejects_unexpected_names() {
        let params = ToolParameters::from_pairs([("action", "generate"), ("colour", "red")]);
        let err = params.resolve(&image_definitions()).unwrap_err();

        assert_eq!(err.to_string(), "Unexpected parameter(s): colour");
    }

    #[test]
    fn test_get_required_and_get_or() {
        let params = ToolParameters::new().with("query", "rust");

        assert_eq!(params.get_required("query").unwrap(), "rust");
        assert!(params.get_required("missing").is_err());
        assert_eq!(params.get_or("pattern", "*"), "*");
    }

    #[test]
    fn test_display_text() {
        assert_eq!(ToolResult::success("done".to_string()).display_text(), "done");
        assert_eq!(ToolResult::error("boom".to_string()).display_text(), "boom");
    }
}
