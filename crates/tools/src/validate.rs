//! Declarative argument validation.
//!
//! Tools validate string arguments against closed sets before any other
//! work happens. A failed check yields the complete error envelope, so the
//! caller can return it directly and perform no partial computation.

use crate::ToolResult;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Parse tool arguments, applying declared serde defaults for absent
/// fields. `None` is treated as an empty object.
pub fn parse_args<T: DeserializeOwned>(arguments: Option<Value>) -> Result<T, ToolResult> {
    let value = arguments.unwrap_or_else(|| Value::Object(Map::new()));
    serde_json::from_value(value).map_err(|e| ToolResult::failure("Invalid arguments", e.to_string()))
}

/// Check that `value` is a member of `allowed`.
///
/// The error details list the allowed values in their declared order.
pub fn require_member(value: &str, allowed: &[&str], param: &str) -> Result<(), ToolResult> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(invalid(
        param,
        format!(
            "{} \"{value}\" is not valid. Use one of: {}",
            capitalize(param),
            allowed.join(", ")
        ),
    ))
}

/// Build a validation failure for `param` with custom details.
///
/// Used where the allowed set is too large to enumerate (the timezone
/// database) and the message shows representative examples instead.
pub fn invalid(param: &str, details: impl Into<String>) -> ToolResult {
    ToolResult::failure(format!("Invalid {param}"), details)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Args {
        #[serde(default = "default_mode")]
        mode: String,
    }

    fn default_mode() -> String {
        "fast".to_string()
    }

    #[test]
    fn parse_args_applies_defaults() {
        let args: Args = parse_args(None).unwrap();
        assert_eq!(args.mode, "fast");

        let args: Args = parse_args(Some(serde_json::json!({"mode": "slow"}))).unwrap();
        assert_eq!(args.mode, "slow");
    }

    #[test]
    fn parse_args_rejects_wrong_types() {
        let result: Result<Args, _> = parse_args(Some(serde_json::json!({"mode": 7})));
        let failure = result.unwrap_err().to_value();
        assert_eq!(failure["error"], "Invalid arguments");
    }

    #[test]
    fn require_member_accepts_members() {
        assert!(require_member("b", &["a", "b"], "mode").is_ok());
    }

    #[test]
    fn require_member_lists_allowed_values() {
        let failure = require_member("x", &["a", "b", "c"], "mode")
            .unwrap_err()
            .to_value();
        assert_eq!(failure["error"], "Invalid mode");
        assert_eq!(
            failure["details"],
            "Mode \"x\" is not valid. Use one of: a, b, c"
        );
    }
}
