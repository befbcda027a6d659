//! Current-time tool.

use crate::{Tool, ToolResult, format, validate};
use chrono::Utc;
use chrono_tz::Tz;
use serde::Deserialize;
use serde_json::{Map, Value, json};

const DEFAULT_FORMAT: &str = "Y-m-d H:i:s";
const DEFAULT_TIMEZONE: &str = "UTC";

/// Arguments accepted by the clock tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ClockArgs {
    /// PHP `date()`-style format pattern.
    #[serde(default = "default_format")]
    pub format: String,

    /// IANA timezone identifier.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for ClockArgs {
    fn default() -> Self {
        Self {
            format: default_format(),
            timezone: default_timezone(),
        }
    }
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

/// Reports the current time in a caller-chosen timezone and format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockTool;

impl ClockTool {
    pub const NAME: &'static str = "clock";

    pub fn execute(&self, args: &ClockArgs) -> ToolResult {
        // Membership in the tz database is the whole validation; nothing
        // else runs if this fails.
        let tz: Tz = match args.timezone.parse() {
            Ok(tz) => tz,
            Err(_) => {
                return validate::invalid(
                    "timezone",
                    format!(
                        "Timezone \"{}\" is not valid. Use one of the valid timezone identifiers \
                         (e.g., UTC, America/New_York, Europe/London)",
                        args.timezone
                    ),
                );
            }
        };

        let now = Utc::now().with_timezone(&tz);
        match format::render(&now, &args.format) {
            Ok(time) => {
                let mut payload = Map::new();
                payload.insert("time".to_string(), Value::String(time));
                ToolResult::success(payload)
            }
            Err(e) => ToolResult::failure("Failed to generate time", e.to_string()),
        }
    }
}

impl Tool for ClockTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Get current time with customizable format and timezone"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "format": {
                    "type": "string",
                    "description": "PHP date()-style format pattern",
                    "default": DEFAULT_FORMAT
                },
                "timezone": {
                    "type": "string",
                    "description": "IANA timezone identifier",
                    "default": DEFAULT_TIMEZONE
                }
            }
        })
    }

    fn call(&self, arguments: Option<Value>) -> ToolResult {
        match validate::parse_args(arguments) {
            Ok(args) => self.execute(&args),
            Err(failure) => failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn rejects_unknown_timezone() {
        let args = ClockArgs {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..ClockArgs::default()
        };
        let value = ClockTool.execute(&args).to_value();
        assert_eq!(value["error"], "Invalid timezone");
        assert!(value.get("time").is_none());
        let details = value["details"].as_str().unwrap();
        assert!(details.contains("Mars/Olympus_Mons"));
        assert!(details.contains("America/New_York"));
    }

    #[test]
    fn default_format_shape() {
        let value = ClockTool.call(None).to_value();
        let time = value["time"].as_str().unwrap();
        // \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}
        assert_eq!(time.len(), 19);
        let bytes = time.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            match i {
                4 | 7 => assert_eq!(*b, b'-'),
                10 => assert_eq!(*b, b' '),
                13 | 16 => assert_eq!(*b, b':'),
                _ => assert!(b.is_ascii_digit(), "non-digit at {i} in {time}"),
            }
        }
    }

    #[test]
    fn year_only_format() {
        let args = ClockArgs {
            format: "Y".to_string(),
            ..ClockArgs::default()
        };
        let value = ClockTool.execute(&args).to_value();
        assert_eq!(value["time"], Utc::now().year().to_string());
    }

    #[test]
    fn unsupported_directive_reports_computation_failure() {
        let args = ClockArgs {
            format: "B".to_string(),
            ..ClockArgs::default()
        };
        let value = ClockTool.execute(&args).to_value();
        assert_eq!(value["error"], "Failed to generate time");
        assert_eq!(value["details"], "unsupported format directive 'B'");
    }

    #[test]
    fn arbitrary_valid_timezone() {
        let result = ClockTool.call(Some(json!({"timezone": "Europe/London"})));
        assert!(!result.is_failure());
    }
}
