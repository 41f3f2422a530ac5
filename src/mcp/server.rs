// ABOUTME: MCP server over the stdio transport: line-delimited JSON-RPC dispatch
// ABOUTME: Routes initialize/ping/tools requests and executes tool calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # MCP Server
//!
//! Serves the MCP protocol over stdio: one JSON-RPC message per line on
//! stdin, one response per line on stdout. All logging goes to stderr so
//! the protocol channel stays clean. Notifications (requests without an
//! id) are consumed without a response; unparseable lines produce a
//! `-32700` response.

use std::sync::Arc;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::errors::AppResult;
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::mcp::protocol::ProtocolHandler;
use crate::mcp::resources::ServerResources;
use crate::mcp::schema::{Content, ToolResponse};
use crate::tools::{ToolExecutionContext, ToolRegistry};

/// The CoachKit MCP server
pub struct McpServer {
    resources: Arc<ServerResources>,
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a server over shared resources and a populated registry
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>, registry: ToolRegistry) -> Self {
        Self {
            resources,
            registry,
        }
    }

    /// Run the stdio transport until stdin closes.
    ///
    /// # Errors
    ///
    /// Returns an error when stdin or stdout fails; individual request
    /// failures become JSON-RPC error responses instead.
    pub async fn run_stdio(&self) -> AppResult<()> {
        info!(
            tools = self.registry.len(),
            "MCP stdio transport ready - listening on stdin/stdout"
        );

        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(stdin).lines();

        while let Some(line) = lines.next_line().await.map_err(crate::errors::AppError::from)? {
            if line.trim().is_empty() {
                continue;
            }
            let Some(response) = self.process_line(&line).await else {
                continue;
            };
            let payload = serde_json::to_string(&response).map_err(crate::errors::AppError::from)?;
            stdout
                .write_all(payload.as_bytes())
                .await
                .map_err(crate::errors::AppError::from)?;
            stdout
                .write_all(b"\n")
                .await
                .map_err(crate::errors::AppError::from)?;
            stdout.flush().await.map_err(crate::errors::AppError::from)?;
        }

        info!("stdin closed, MCP server shutting down");
        Ok(())
    }

    /// Process one line; `None` means no response is owed (notification)
    async fn process_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(err) => {
                warn!("Invalid JSON-RPC message: {}", err);
                return Some(JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    "Parse error",
                ));
            }
        };

        if request.is_notification() {
            debug!(method = %request.method, "notification consumed");
            return None;
        }
        Some(self.handle_request(request).await)
    }

    /// Dispatch one request to its handler
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => ProtocolHandler::handle_initialize(&request),
            "ping" => ProtocolHandler::handle_ping(&request),
            "tools/list" => ProtocolHandler::handle_tools_list(&request, &self.registry),
            "tools/call" => self.handle_tool_call(request).await,
            _ => ProtocolHandler::handle_unknown_method(&request),
        }
    }

    async fn handle_tool_call(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.clone();
        let Some(params) = request.params else {
            return JsonRpcResponse::error(
                request_id,
                error_codes::INVALID_PARAMS,
                "Missing parameters",
            );
        };
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return JsonRpcResponse::error(
                request_id,
                error_codes::INVALID_PARAMS,
                "Missing tool name",
            );
        };
        let args = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        let context = ToolExecutionContext::new(self.resources.clone());
        match self.registry.execute(name, args, &context).await {
            Ok(result) => {
                let text = serde_json::to_string(&result.content)
                    .unwrap_or_else(|_| "{}".to_owned());
                let tool_response = ToolResponse {
                    content: vec![Content::Text { text }],
                    is_error: result.is_error,
                };
                match serde_json::to_value(&tool_response) {
                    Ok(value) => JsonRpcResponse::success(request_id, value),
                    Err(err) => JsonRpcResponse::error(
                        request_id,
                        error_codes::INTERNAL_ERROR,
                        err.to_string(),
                    ),
                }
            }
            Err(err) => {
                warn!(tool = name, error = %err, "tool execution failed");
                JsonRpcResponse::error(request_id, err.code.json_rpc_code(), err.to_string())
            }
        }
    }
}
