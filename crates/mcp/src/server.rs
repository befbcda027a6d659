//! Stdio transport: newline-delimited JSON-RPC dispatch.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use crate::error::Result;
use crate::protocol::{
    self, CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, RequestId,
};
use crate::registry::Registry;

/// Maximum accepted request line (1MB).
pub const MAX_LINE_SIZE: usize = 1024 * 1024;

/// MCP server speaking JSON-RPC over stdin/stdout.
///
/// Request handling is synchronous and pure; async appears only in the
/// IO loop. Diagnostics go to stderr via `tracing`, keeping stdout clean
/// for the protocol.
pub struct Server {
    name: String,
    version: String,
    registry: Registry,
}

impl Server {
    pub fn new(name: impl Into<String>, version: impl Into<String>, registry: Registry) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            registry,
        }
    }

    /// Serve requests from stdin until EOF.
    pub async fn run(&self) -> Result<()> {
        let mut reader = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut line = String::new();

        loop {
            line.clear();
            let bytes_read = reader.read_line(&mut line).await?;
            if bytes_read == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let Some(response) = self.handle_line(&line) else {
                continue;
            };
            let json = serde_json::to_string(&response)?;
            stdout.write_all(json.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }

        Ok(())
    }

    /// Handle one raw request line. `None` means no response is due
    /// (the line was a notification).
    pub fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        if line.len() > MAX_LINE_SIZE {
            return Some(JsonRpcResponse::error(
                None,
                JsonRpcError::new(protocol::INVALID_REQUEST, "request too large"),
            ));
        }

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!("malformed request: {e}");
                return Some(JsonRpcResponse::error(
                    None,
                    JsonRpcError::new(protocol::PARSE_ERROR, "Parse error"),
                ));
            }
        };

        self.handle_request(request)
    }

    /// Dispatch a decoded request.
    pub fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!(method = %request.method, "notification");
            return None;
        }

        debug!(method = %request.method, "request");
        let id = request.id;
        let response = match request.method.as_str() {
            "initialize" => ok(id, InitializeResult::new(&self.name, &self.version)),
            "ping" => JsonRpcResponse::result(id, serde_json::json!({})),
            "tools/list" => ok(
                id,
                ListToolsResult {
                    tools: self.registry.specs(),
                },
            ),
            "tools/call" => self.handle_call(id, request.params),
            other => JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)),
        };
        Some(response)
    }

    fn handle_call(
        &self,
        id: Option<RequestId>,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        let params: CallToolParams =
            match serde_json::from_value(params.unwrap_or(serde_json::Value::Null)) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(
                        id,
                        JsonRpcError::invalid_params(format!("invalid params for tools/call: {e}")),
                    );
                }
            };

        match self.registry.call(&params.name, params.arguments) {
            Some(result) => ok(id, result),
            None => JsonRpcResponse::error(
                id,
                JsonRpcError::new(
                    protocol::METHOD_NOT_FOUND,
                    format!("unknown tool: {}", params.name),
                ),
            ),
        }
    }
}

fn ok(id: Option<RequestId>, result: impl serde::Serialize) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::result(id, value),
        Err(e) => JsonRpcResponse::error(
            id,
            JsonRpcError::new(protocol::INTERNAL_ERROR, e.to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tools::ClockTool;

    fn server() -> Server {
        let mut registry = Registry::new();
        registry.register(ClockTool);
        Server::new("debugmcp", "0.1.0", registry)
    }

    fn response_value(server: &Server, line: &str) -> Value {
        let response = server.handle_line(line).expect("expected a response");
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn initialize() {
        let value = response_value(
            &server(),
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"0"}}}"#,
        );
        assert_eq!(value["result"]["protocolVersion"], protocol::PROTOCOL_VERSION);
        assert_eq!(value["result"]["serverInfo"]["name"], "debugmcp");
    }

    #[test]
    fn tools_list() {
        let value = response_value(&server(), r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#);
        let tools = value["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "clock");
    }

    #[test]
    fn tools_call_failure_envelope() {
        let value = response_value(
            &server(),
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"clock","arguments":{"timezone":"bad"}}}"#,
        );
        assert_eq!(value["result"]["isError"], true);
        let text = value["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("Invalid timezone"));
    }

    #[test]
    fn parse_error() {
        let value = response_value(&server(), "not json");
        assert_eq!(value["error"]["code"], protocol::PARSE_ERROR);
        assert!(value["id"].is_null());
    }

    #[test]
    fn method_not_found() {
        let value = response_value(&server(), r#"{"jsonrpc":"2.0","id":4,"method":"resources/list"}"#);
        assert_eq!(value["error"]["code"], protocol::METHOD_NOT_FOUND);
    }

    #[test]
    fn unknown_tool() {
        let value = response_value(
            &server(),
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"nope"}}"#,
        );
        assert_eq!(value["error"]["code"], protocol::METHOD_NOT_FOUND);
    }

    #[test]
    fn notification_gets_no_response() {
        let server = server();
        assert!(
            server
                .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
                .is_none()
        );
    }

    #[test]
    fn ping() {
        let value = response_value(&server(), r#"{"jsonrpc":"2.0","id":6,"method":"ping"}"#);
        assert!(value["result"].as_object().unwrap().is_empty());
    }
}
