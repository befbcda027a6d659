//! Debug tool implementations.
//!
//! This crate provides the callable tools served by the `debugmcp` binary,
//! independent of any transport:
//!
//! - **ClockTool**: the current time in a caller-chosen timezone, rendered
//!   with a PHP-`date()`-style format pattern.
//! - **SystemInfoTool**: runtime configuration facts (version, limits,
//!   loaded extensions, configured paths), filtered by section.
//!
//! Both return a [`ToolResult`] envelope: either a flat payload object or
//! an `{error, details}` pair. Errors never cross the tool boundary as
//! `Err`; a tool call always produces a result value.
//!
//! # Example
//!
//! ```
//! use tools::{ClockTool, Tool};
//! use serde_json::json;
//!
//! let result = ClockTool.call(Some(json!({"format": "Y", "timezone": "UTC"})));
//! assert!(!result.is_failure());
//! ```

mod clock;
mod format;
mod inspect;
mod result;
mod sysinfo;

pub mod reporting;
pub mod validate;

pub use clock::{ClockArgs, ClockTool};
pub use format::{FormatError, render};
pub use inspect::{EnvironmentInspector, HostInspector, HostProfile, StaticInspector};
pub use result::ToolResult;
pub use sysinfo::{SystemInfoArgs, SystemInfoTool};

use serde_json::Value;

/// Trait for callable debug tools.
///
/// Implementations describe their input contract (name, description,
/// JSON schema) and execute a single synchronous call. This is the
/// boundary the host registry dispatches through.
pub trait Tool: Send + Sync {
    /// Tool name, as exposed to MCP clients.
    fn name(&self) -> &'static str;

    /// One-line human-readable description.
    fn description(&self) -> &'static str;

    /// JSON schema for the tool's arguments.
    fn input_schema(&self) -> Value;

    /// Execute a call. Absent arguments fall back to declared defaults;
    /// every failure is reported through the envelope, never panicked or
    /// raised.
    fn call(&self, arguments: Option<Value>) -> ToolResult;
}
