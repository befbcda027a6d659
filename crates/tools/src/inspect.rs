//! Ambient environment introspection.

use std::path::PathBuf;

/// Capability interface over ambient host state.
///
/// The system_info tool reads runtime facts exclusively through this
/// trait, so tests can substitute a deterministic in-memory
/// implementation. Facts are read on every call; implementations must not
/// cache across calls on the tool's behalf.
pub trait EnvironmentInspector: Send + Sync {
    /// Version of the running server.
    fn runtime_version(&self) -> String;

    /// Identifier of the underlying engine/protocol revision.
    fn engine_version(&self) -> String;

    /// Configured memory limit, if set.
    fn memory_limit(&self) -> Option<String>;

    /// Configured maximum execution time, if set.
    fn max_execution_time(&self) -> Option<String>;

    /// Active error-reporting mask.
    fn reporting_mask(&self) -> u32;

    /// Names of the loaded extension modules.
    fn loaded_extensions(&self) -> Vec<String>;

    /// Search path used for configuration discovery.
    fn include_path(&self) -> String;

    /// Path of the loaded configuration file, if one was found.
    fn config_file_path(&self) -> Option<PathBuf>;

    /// Directory scanned for configuration overlays, if present.
    fn config_file_scan_dir(&self) -> Option<PathBuf>;
}

/// Startup snapshot the host layer feeds into a [`HostInspector`].
#[derive(Debug, Clone, Default)]
pub struct HostProfile {
    pub version: String,
    pub engine: String,
    pub memory_limit: Option<String>,
    pub max_execution_time: Option<u64>,
    pub reporting_mask: u32,
    pub extensions: Vec<String>,
    pub include_path: String,
    pub config_file: Option<PathBuf>,
    pub config_scan_dir: Option<PathBuf>,
}

/// Inspector backed by the real host process.
///
/// Built once at startup by the binary from its config discovery and
/// tool registration; the profile captures exactly the state the process
/// runs with.
#[derive(Debug)]
pub struct HostInspector {
    profile: HostProfile,
}

impl HostInspector {
    pub fn new(profile: HostProfile) -> Self {
        Self { profile }
    }
}

impl EnvironmentInspector for HostInspector {
    fn runtime_version(&self) -> String {
        self.profile.version.clone()
    }

    fn engine_version(&self) -> String {
        self.profile.engine.clone()
    }

    fn memory_limit(&self) -> Option<String> {
        self.profile.memory_limit.clone()
    }

    fn max_execution_time(&self) -> Option<String> {
        self.profile.max_execution_time.map(|secs| secs.to_string())
    }

    fn reporting_mask(&self) -> u32 {
        self.profile.reporting_mask
    }

    fn loaded_extensions(&self) -> Vec<String> {
        self.profile.extensions.clone()
    }

    fn include_path(&self) -> String {
        self.profile.include_path.clone()
    }

    fn config_file_path(&self) -> Option<PathBuf> {
        self.profile.config_file.clone()
    }

    fn config_file_scan_dir(&self) -> Option<PathBuf> {
        self.profile.config_scan_dir.clone()
    }
}

/// In-memory inspector with fixed answers.
///
/// Useful for tests and for hosts that assemble facts themselves.
#[derive(Debug, Clone, Default)]
pub struct StaticInspector {
    pub runtime_version: String,
    pub engine_version: String,
    pub memory_limit: Option<String>,
    pub max_execution_time: Option<String>,
    pub reporting_mask: u32,
    pub extensions: Vec<String>,
    pub include_path: String,
    pub config_file_path: Option<PathBuf>,
    pub config_file_scan_dir: Option<PathBuf>,
}

impl EnvironmentInspector for StaticInspector {
    fn runtime_version(&self) -> String {
        self.runtime_version.clone()
    }

    fn engine_version(&self) -> String {
        self.engine_version.clone()
    }

    fn memory_limit(&self) -> Option<String> {
        self.memory_limit.clone()
    }

    fn max_execution_time(&self) -> Option<String> {
        self.max_execution_time.clone()
    }

    fn reporting_mask(&self) -> u32 {
        self.reporting_mask
    }

    fn loaded_extensions(&self) -> Vec<String> {
        self.extensions.clone()
    }

    fn include_path(&self) -> String {
        self.include_path.clone()
    }

    fn config_file_path(&self) -> Option<PathBuf> {
        self.config_file_path.clone()
    }

    fn config_file_scan_dir(&self) -> Option<PathBuf> {
        self.config_file_scan_dir.clone()
    }
}
