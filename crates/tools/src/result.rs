//! Tool result envelope.

use serde::Serialize;
use serde_json::{Map, Value};

/// The result returned to the host after a tool call.
///
/// Serializes to a flat JSON object either way: the success payload as-is,
/// or an `{"error": .., "details": ..}` pair. Exactly one variant is ever
/// populated; there is no partial-success state.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ToolResult {
    Success(Map<String, Value>),
    Failure { error: String, details: String },
}

impl ToolResult {
    /// Wrap a successful payload.
    pub fn success(payload: Map<String, Value>) -> Self {
        Self::Success(payload)
    }

    /// Wrap an error kind and its human-readable details.
    pub fn failure(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
            details: details.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// The envelope as a flat JSON object.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_serializes_flat() {
        let mut payload = Map::new();
        payload.insert("time".to_string(), Value::String("2024".to_string()));
        let value = ToolResult::success(payload).to_value();
        assert_eq!(value["time"], "2024");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn failure_serializes_error_pair() {
        let value = ToolResult::failure("Invalid section", "bad input").to_value();
        assert_eq!(value["error"], "Invalid section");
        assert_eq!(value["details"], "bad input");
        assert_eq!(value.as_object().map(|o| o.len()), Some(2));
    }
}
