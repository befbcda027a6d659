//! CLI error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is invalid.
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The --args value was not a JSON object.
    #[error("tool arguments must be a JSON object: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    /// No registered tool has the given name.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// An error occurred in the transport layer.
    #[error(transparent)]
    Mcp(#[from] mcp::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
