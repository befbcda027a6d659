//! Runtime configuration inspection tool.

use crate::inspect::EnvironmentInspector;
use crate::{Tool, ToolResult, reporting, validate};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::path::PathBuf;

/// Arguments accepted by the system_info tool.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemInfoArgs {
    #[serde(default = "default_section")]
    pub section: String,
}

impl Default for SystemInfoArgs {
    fn default() -> Self {
        Self {
            section: default_section(),
        }
    }
}

fn default_section() -> String {
    "general".to_string()
}

/// Which group of facts a request selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    General,
    Extensions,
    Paths,
    All,
}

impl Section {
    const ALLOWED: &'static [&'static str] = &["general", "extensions", "paths", "all"];

    fn parse(value: &str) -> Result<Self, ToolResult> {
        validate::require_member(value, Self::ALLOWED, "section")?;
        Ok(match value {
            "general" => Self::General,
            "extensions" => Self::Extensions,
            "paths" => Self::Paths,
            _ => Self::All,
        })
    }

    fn covers(self, group: Self) -> bool {
        self == group || self == Self::All
    }
}

/// Reports host runtime facts grouped into sections.
///
/// The three sub-reports use disjoint key names, so merging for `all` is
/// a plain key-wise union. Facts are read from the inspector on every
/// call; nothing is cached.
pub struct SystemInfoTool {
    inspector: Box<dyn EnvironmentInspector>,
}

impl SystemInfoTool {
    pub const NAME: &'static str = "system_info";

    pub fn new(inspector: impl EnvironmentInspector + 'static) -> Self {
        Self {
            inspector: Box::new(inspector),
        }
    }

    pub fn execute(&self, args: &SystemInfoArgs) -> ToolResult {
        let section = match Section::parse(&args.section) {
            Ok(section) => section,
            Err(failure) => return failure,
        };

        let mut payload = Map::new();
        if section.covers(Section::General) {
            payload.extend(self.general_facts());
        }
        if section.covers(Section::Extensions) {
            payload.extend(self.extension_facts());
        }
        if section.covers(Section::Paths) {
            payload.extend(self.path_facts());
        }

        ToolResult::success(payload)
    }

    fn general_facts(&self) -> Map<String, Value> {
        let mut facts = Map::new();
        facts.insert(
            "runtime_version".to_string(),
            self.inspector.runtime_version().into(),
        );
        facts.insert(
            "engine_version".to_string(),
            self.inspector.engine_version().into(),
        );
        facts.insert(
            "memory_limit".to_string(),
            self.inspector
                .memory_limit()
                .unwrap_or_else(|| "unknown".to_string())
                .into(),
        );
        facts.insert(
            "max_execution_time".to_string(),
            self.inspector
                .max_execution_time()
                .unwrap_or_else(|| "unknown".to_string())
                .into(),
        );
        facts.insert(
            "error_reporting".to_string(),
            reporting::describe(self.inspector.reporting_mask()).into(),
        );
        facts
    }

    fn extension_facts(&self) -> Map<String, Value> {
        let mut extensions = self.inspector.loaded_extensions();
        extensions.sort();
        let count = extensions.len();

        let mut facts = Map::new();
        facts.insert("extensions".to_string(), extensions.into());
        facts.insert("count".to_string(), count.into());
        facts
    }

    fn path_facts(&self) -> Map<String, Value> {
        let mut facts = Map::new();
        facts.insert(
            "include_path".to_string(),
            self.inspector.include_path().into(),
        );
        facts.insert(
            "config_file_path".to_string(),
            path_or_none(self.inspector.config_file_path()),
        );
        facts.insert(
            "config_file_scan_dir".to_string(),
            path_or_none(self.inspector.config_file_scan_dir()),
        );
        facts
    }
}

fn path_or_none(path: Option<PathBuf>) -> Value {
    match path {
        Some(path) => Value::String(path.display().to_string()),
        None => Value::String("none".to_string()),
    }
}

impl Tool for SystemInfoTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Inspect runtime configuration and environment"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "section": {
                    "type": "string",
                    "enum": Section::ALLOWED,
                    "default": "general"
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
    use crate::inspect::StaticInspector;

    fn fixture() -> SystemInfoTool {
        SystemInfoTool::new(StaticInspector {
            runtime_version: "0.1.0".to_string(),
            engine_version: "mcp 2024-11-05".to_string(),
            memory_limit: Some("256M".to_string()),
            max_execution_time: Some("30".to_string()),
            reporting_mask: reporting::ERROR | reporting::WARNING,
            extensions: vec![
                "system_info".to_string(),
                "clock".to_string(),
            ],
            include_path: ".:/home/user/.config/debugmcp".to_string(),
            config_file_path: Some(PathBuf::from("./debugmcp.toml")),
            config_file_scan_dir: None,
        })
    }

    fn section(tool: &SystemInfoTool, name: &str) -> Value {
        tool.execute(&SystemInfoArgs {
            section: name.to_string(),
        })
        .to_value()
    }

    #[test]
    fn rejects_unknown_section() {
        let tool = fixture();
        let value = section(&tool, "bogus");
        assert_eq!(value["error"], "Invalid section");
        assert_eq!(
            value["details"],
            "Section \"bogus\" is not valid. Use one of: general, extensions, paths, all"
        );
    }

    #[test]
    fn general_section_facts() {
        let tool = fixture();
        let value = section(&tool, "general");
        assert_eq!(value["runtime_version"], "0.1.0");
        assert_eq!(value["engine_version"], "mcp 2024-11-05");
        assert_eq!(value["memory_limit"], "256M");
        assert_eq!(value["max_execution_time"], "30");
        assert_eq!(value["error_reporting"], "ERROR | WARNING");
        assert_eq!(value.as_object().map(|o| o.len()), Some(5));
    }

    #[test]
    fn default_section_is_general() {
        let tool = fixture();
        let value = tool.call(None).to_value();
        assert!(value.get("runtime_version").is_some());
        assert!(value.get("extensions").is_none());
    }

    #[test]
    fn extensions_sorted_with_count() {
        let tool = fixture();
        let value = section(&tool, "extensions");
        let extensions = value["extensions"].as_array().unwrap();
        assert_eq!(
            extensions,
            &vec![Value::from("clock"), Value::from("system_info")]
        );
        assert_eq!(value["count"], 2);
        assert_eq!(value.as_object().map(|o| o.len()), Some(2));
    }

    #[test]
    fn paths_section_with_fallbacks() {
        let tool = fixture();
        let value = section(&tool, "paths");
        assert_eq!(value["include_path"], ".:/home/user/.config/debugmcp");
        assert_eq!(value["config_file_path"], "./debugmcp.toml");
        assert_eq!(value["config_file_scan_dir"], "none");
    }

    #[test]
    fn unset_limits_report_unknown() {
        let tool = SystemInfoTool::new(StaticInspector::default());
        let value = section(&tool, "general");
        assert_eq!(value["memory_limit"], "unknown");
        assert_eq!(value["max_execution_time"], "unknown");
    }

    #[test]
    fn all_is_exact_union_of_sections() {
        let tool = fixture();
        let all = section(&tool, "all");
        let all = all.as_object().unwrap();

        let mut expected: Vec<String> = Vec::new();
        for name in ["general", "extensions", "paths"] {
            let sub = section(&tool, name);
            for key in sub.as_object().unwrap().keys() {
                assert!(!expected.contains(key), "duplicate key {key}");
                expected.push(key.clone());
            }
        }

        assert_eq!(all.len(), expected.len());
        for key in &expected {
            assert!(all.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let tool = fixture();
        assert_eq!(section(&tool, "all"), section(&tool, "all"));
    }
}
