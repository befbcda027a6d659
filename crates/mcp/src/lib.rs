//! MCP (Model Context Protocol) server library.
//!
//! This crate provides the host-integration layer for the debug tools:
//! an explicit registration table and a stdio JSON-RPC transport. Tools
//! themselves live in the `tools` crate; this crate only frames their
//! `(arguments) -> envelope` contract for MCP clients.
//!
//! # Example
//!
//! ```no_run
//! use mcp::{Registry, Server};
//! use tools::ClockTool;
//!
//! # async fn example() -> mcp::Result<()> {
//! let mut registry = Registry::new();
//! registry.register(ClockTool);
//!
//! let server = Server::new("debugmcp", env!("CARGO_PKG_VERSION"), registry);
//! server.run().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod protocol;
mod registry;
mod server;

pub use error::{Error, Result};
pub use protocol::{
    CallToolParams, CallToolResult, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, PROTOCOL_VERSION, RequestId, ServerCapabilities, ServerInfo,
    ToolContent, ToolSpec, ToolsCapability,
};
pub use registry::Registry;
pub use server::{MAX_LINE_SIZE, Server};
