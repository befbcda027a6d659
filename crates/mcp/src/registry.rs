//! Tool registration table.

use crate::protocol::{CallToolResult, ToolContent, ToolSpec};
use serde_json::Value;
use tools::Tool;

/// Explicit name-to-handler table owned by the host layer.
///
/// Every tool is registered by the binary at startup; dispatch is a
/// linear scan over the table. Tools never raise past this boundary:
/// their envelope is serialized into a text content block, with
/// `is_error` mirroring the envelope variant.
#[derive(Default)]
pub struct Registry {
    entries: Vec<Box<dyn Tool>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: impl Tool + 'static) -> &mut Self {
        self.entries.push(Box::new(tool));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Registered tool names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|t| t.name().to_string()).collect()
    }

    /// Tool definitions for tools/list.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.entries
            .iter()
            .map(|t| ToolSpec {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.input_schema(),
            })
            .collect()
    }

    /// Call a tool by name. Returns `None` for unregistered names.
    pub fn call(&self, name: &str, arguments: Option<Value>) -> Option<CallToolResult> {
        let tool = self.entries.iter().find(|t| t.name() == name)?;
        let outcome = tool.call(arguments);
        let text =
            serde_json::to_string_pretty(&outcome).unwrap_or_else(|_| "{}".to_string());
        Some(CallToolResult {
            content: vec![ToolContent::Text { text }],
            is_error: outcome.is_failure(),
        })
    }
}
