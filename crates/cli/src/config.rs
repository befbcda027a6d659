//! Configuration loading from debugmcp.toml.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tools::reporting;

/// Configuration file name searched for on the include path.
pub const CONFIG_FILE: &str = "debugmcp.toml";

/// Overlay directory name, sibling to the loaded file.
pub const SCAN_DIR: &str = "debugmcp.d";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Resource limits advertised by the system_info tool.
    #[serde(default)]
    pub limits: Limits,

    /// Error-reporting verbosity.
    #[serde(default)]
    pub reporting: Reporting,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Limits {
    /// Memory ceiling, e.g. "256M".
    pub memory_limit: Option<String>,

    /// Maximum seconds a tool call may run.
    pub max_execution_time: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reporting {
    /// Level names ("error", "warning", "notice", "deprecated", "debug"),
    /// or ["all"] for everything.
    #[serde(default = "default_levels")]
    pub levels: Vec<String>,
}

impl Default for Reporting {
    fn default() -> Self {
        Self {
            levels: default_levels(),
        }
    }
}

fn default_levels() -> Vec<String> {
    vec!["error".to_string(), "warning".to_string()]
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Active reporting mask derived from the configured level names.
    pub fn reporting_mask(&self) -> Result<u32, ConfigError> {
        let mut mask = 0;
        for level in &self.reporting.levels {
            let flag = reporting::flag_named(level)
                .ok_or_else(|| ConfigError::UnknownLevel(level.clone()))?;
            if flag == reporting::REPORT_ALL {
                return Ok(reporting::REPORT_ALL);
            }
            mask |= flag;
        }
        Ok(mask)
    }

    fn apply(&mut self, overlay: Overlay) {
        if overlay.limits.memory_limit.is_some() {
            self.limits.memory_limit = overlay.limits.memory_limit;
        }
        if overlay.limits.max_execution_time.is_some() {
            self.limits.max_execution_time = overlay.limits.max_execution_time;
        }
        if let Some(reporting) = overlay.reporting {
            self.reporting = reporting;
        }
    }
}

/// Partial configuration from an overlay file. Set fields win over the
/// base config; unset fields leave it untouched.
#[derive(Debug, Default, Deserialize)]
struct Overlay {
    #[serde(default)]
    limits: Limits,
    reporting: Option<Reporting>,
}

/// Where configuration was found; feeds the paths section of the
/// system_info tool.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Directories searched, in order.
    pub search_path: Vec<PathBuf>,

    /// File actually loaded, if any.
    pub file: Option<PathBuf>,

    /// Overlay directory scanned, if present.
    pub scan_dir: Option<PathBuf>,
}

impl Discovery {
    /// The search path rendered as a single ':'-joined string.
    pub fn include_path(&self) -> String {
        self.search_path
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(":")
    }
}

/// Locate and load configuration.
///
/// Searches the current directory, then `$HOME/.config/debugmcp`. The
/// first `debugmcp.toml` found wins; a sibling `debugmcp.d/` directory
/// is scanned for `*.toml` overlays applied in file-name order. A
/// missing config file is not an error; defaults apply.
pub fn discover() -> Result<(Config, Discovery), ConfigError> {
    let mut search_path = vec![PathBuf::from(".")];
    if let Ok(home) = std::env::var("HOME") {
        search_path.push(PathBuf::from(home).join(".config").join("debugmcp"));
    }
    discover_in(&search_path)
}

fn discover_in(search_path: &[PathBuf]) -> Result<(Config, Discovery), ConfigError> {
    let mut discovery = Discovery {
        search_path: search_path.to_vec(),
        file: None,
        scan_dir: None,
    };
    let mut config = Config::default();

    for dir in search_path {
        let candidate = dir.join(CONFIG_FILE);
        if !candidate.is_file() {
            continue;
        }
        config = Config::load(&candidate)?;
        discovery.file = Some(candidate);

        let scan_dir = dir.join(SCAN_DIR);
        if scan_dir.is_dir() {
            apply_overlays(&mut config, &scan_dir)?;
            discovery.scan_dir = Some(scan_dir);
        }
        break;
    }

    Ok((config, discovery))
}

fn apply_overlays(config: &mut Config, dir: &Path) -> Result<(), ConfigError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();

    for path in paths {
        let content = std::fs::read_to_string(&path)?;
        let overlay: Overlay = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))?;
        config.apply(overlay);
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("unknown reporting level: {0}")]
    UnknownLevel(String),
}
