//! `TOOL_CALL[name:key=value,...]` directives embedded in model replies.
//!
//! The grammar has no quoting: parameters are split on `,` and the parameter
//! list ends at the first `]`, so a value containing either character is cut
//! short. Replies are scanned once; the substituted blocks are never rescanned.

use anyhow::Result;
use regex::Regex;

use agentchat_toolcore::{ToolContext, ToolParameters, ToolRegistry};

const DIRECTIVE_PATTERN: &str = r"TOOL_CALL\[([^:]+):([^\]]+)\]";

/// One directive as found in a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Name as written, untrimmed
    pub name: String,
    /// Parameter text as written, unparsed
    pub raw_params: String,
    pub params: Vec<(String, String)>,
}

impl Directive {
    /// The exact text of the directive in the reply
    pub fn raw(&self) -> String {
        format!("TOOL_CALL[{}:{}]", self.name, self.raw_params)
    }

    /// Name used for registry lookup
    pub fn tool_name(&self) -> &str {
        self.name.trim()
    }

    pub fn parameters(&self) -> ToolParameters {
        ToolParameters::from_pairs(self.params.iter().cloned())
    }
}

/// Split `k1=v1,k2=v2` into trimmed pairs; chunks without `=` are dropped
pub fn parse_params(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|chunk| chunk.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// Finds directives in a reply and substitutes tool output for them
#[derive(Debug, Clone)]
pub struct DirectiveScanner {
    pattern: Regex,
}

impl DirectiveScanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(DIRECTIVE_PATTERN)?,
        })
    }

    /// All non-overlapping directives, in the order they appear
    pub fn find(&self, response: &str) -> Vec<Directive> {
        self.pattern
            .captures_iter(response)
            .map(|caps| {
                let name = caps[1].to_string();
                let raw_params = caps[2].to_string();
                let params = parse_params(&raw_params);
                Directive {
                    name,
                    raw_params,
                    params,
                }
            })
            .collect()
    }

    /// Run every directive in `response` through the registry and splice the results in.
    ///
    /// Every match is invoked. Substitution replaces all copies of the raw
    /// text, so identical directives all show the first computed result.
    pub async fn process(&self, response: &str, registry: &ToolRegistry, context: &ToolContext) -> String {
        let mut processed = response.to_string();

        for directive in self.find(response) {
            let result = registry
                .execute_tool(directive.tool_name(), directive.parameters(), context)
                .await;

            let block = if result.success {
                format!("\n**Tool Result ({}):** {}\n", directive.name, result.content)
            } else {
                format!("\n**Tool Error ({}):** {}\n", directive.name, result.display_text())
            };
            processed = processed.replace(&directive.raw(), &block);
        }

        processed
    }
}
