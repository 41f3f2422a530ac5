// ABOUTME: MCP protocol message handlers for core protocol operations
// ABOUTME: Handles initialize, ping, and tools/list protocol messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # MCP Protocol Handlers
//!
//! Core MCP protocol message handling for initialization and tools
//! listing. Tool calls are dispatched by the server loop.

use serde_json::Value;

use crate::constants::protocol::{SERVER_NAME, SERVER_VERSION};
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::mcp::schema::InitializeResponse;
use crate::tools::ToolRegistry;

/// MCP protocol handlers
pub struct ProtocolHandler;

/// Default ID for responses to requests that carried none
fn default_request_id() -> Value {
    Value::Number(serde_json::Number::from(0))
}

impl ProtocolHandler {
    /// Handle initialize request
    #[must_use]
    pub fn handle_initialize(request: &JsonRpcRequest) -> JsonRpcResponse {
        let init_response = InitializeResponse::new(SERVER_NAME, SERVER_VERSION);
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        match serde_json::to_value(&init_response) {
            Ok(result) => JsonRpcResponse::success(Some(request_id), result),
            Err(_) => JsonRpcResponse::error(
                Some(request_id),
                error_codes::INTERNAL_ERROR,
                "Internal error",
            ),
        }
    }

    /// Handle ping request
    #[must_use]
    pub fn handle_ping(request: &JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        JsonRpcResponse::success(Some(request_id), serde_json::json!({}))
    }

    /// Handle tools list request
    #[must_use]
    pub fn handle_tools_list(request: &JsonRpcRequest, registry: &ToolRegistry) -> JsonRpcResponse {
        let tools = registry.list_schemas();
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        JsonRpcResponse::success(Some(request_id), serde_json::json!({ "tools": tools }))
    }

    /// Handle unknown method request
    #[must_use]
    pub fn handle_unknown_method(request: &JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        JsonRpcResponse::error(
            Some(request_id),
            error_codes::METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        )
    }
}
