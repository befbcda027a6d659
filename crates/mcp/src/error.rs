//! MCP server error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("transport i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
