// ABOUTME: Tests for the MCP protocol layer: initialize, tools/list, tools/call dispatch
// ABOUTME: Exercises request handling end to end without the stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;

use coachkit_mcp_server::config::{OutputConfig, ServerConfig};
use coachkit_mcp_server::documents::FontBook;
use coachkit_mcp_server::jsonrpc::{error_codes, JsonRpcRequest};
use coachkit_mcp_server::mcp::{McpServer, ServerResources};
use coachkit_mcp_server::tools::implementations::register_builtin_tools;
use coachkit_mcp_server::tools::ToolRegistry;

fn test_server(dir: &TempDir) -> McpServer {
    let config = ServerConfig {
        output: OutputConfig::under_root(dir.path().to_path_buf()),
        mono_font_path: None,
        default_max_width: None,
    };
    let fonts = FontBook::discover(None);
    let mut registry = ToolRegistry::new();
    register_builtin_tools(&mut registry);
    McpServer::new(Arc::new(ServerResources::new(config, fonts)), registry)
}

fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest::with_id(method, params, json!(7))
}

fn tool_call(name: &str, arguments: Value) -> JsonRpcRequest {
    request(
        "tools/call",
        Some(json!({ "name": name, "arguments": arguments })),
    )
}

/// Parse the JSON payload a tool returned inside content[0].text
fn tool_payload(response: &coachkit_mcp_server::jsonrpc::JsonRpcResponse) -> Value {
    let result = response.result.as_ref().unwrap();
    assert_eq!(result["isError"], json!(false));
    let text = result["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

#[tokio::test]
async fn test_initialize() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir);

    let response = server.handle_request(request("initialize", None)).await;

    assert!(response.is_success());
    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], json!("2024-11-05"));
    assert_eq!(result["serverInfo"]["name"], json!("coachkit-mcp-server"));
    assert_eq!(response.id, Some(json!(7)));
}

#[tokio::test]
async fn test_ping() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir);
    let response = server.handle_request(request("ping", None)).await;
    assert!(response.is_success());
}

#[tokio::test]
async fn test_tools_list() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir);

    let response = server.handle_request(request("tools/list", None)).await;
    let result = response.result.unwrap();
    let tools = result["tools"].as_array().unwrap();

    assert_eq!(tools.len(), 11);
    let names: Vec<&str> = tools
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    for expected in [
        "render_tactical_diagram",
        "evaluate_session_plan",
        "compile_to_pdf",
        "compile_to_html",
        "fix_table_alignment",
        "wrap_long_lines",
        "format_text",
        "fix_text_file",
        "format_text_file",
        "fix_text_directory",
        "text_file_to_pdf",
    ] {
        assert!(names.contains(&expected), "missing tool {expected}");
    }
    // Every schema declares an object input
    for tool in tools {
        assert_eq!(tool["inputSchema"]["type"], json!("object"));
    }
}

#[tokio::test]
async fn test_unknown_method() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir);
    let response = server.handle_request(request("bogus/method", None)).await;
    assert!(response.is_error());
    assert_eq!(
        response.error.unwrap().code,
        error_codes::METHOD_NOT_FOUND
    );
}

#[tokio::test]
async fn test_tool_call_fix_table_alignment() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir);

    let response = server
        .handle_request(tool_call(
            "fix_table_alignment",
            json!({ "text": "┌──┬────┐\n│X│YY│\n└──┴────┘" }),
        ))
        .await;

    let payload = tool_payload(&response);
    assert!(payload["fixed_text"]
        .as_str()
        .unwrap()
        .contains("│X │YY  │"));
    assert_eq!(payload["fixes"].as_array().unwrap().len(), 1);
    assert_eq!(payload["warnings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_tool_call_wrap_long_lines() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir);

    let long_line = "word ".repeat(40);
    let response = server
        .handle_request(tool_call(
            "wrap_long_lines",
            json!({ "text": long_line, "max_width": 40 }),
        ))
        .await;

    let payload = tool_payload(&response);
    assert!(payload["wrapped_text"].as_str().unwrap().contains('\n'));
    assert_eq!(payload["changes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_tool_call_evaluate_session_plan() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir);

    let response = server
        .handle_request(tool_call(
            "evaluate_session_plan",
            json!({
                "pitch_length": 105,
                "pitch_width": 68,
                "num_players": 16,
                "activities": [
                    {"name": "Rondo", "area_length": 15, "area_width": 15, "num_players": 6}
                ]
            }),
        ))
        .await;

    let payload = tool_payload(&response);
    assert_eq!(payload["activities"][0]["category"], json!("possession"));
}

#[tokio::test]
async fn test_tool_call_render_tactical_diagram() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir);

    let response = server
        .handle_request(tool_call(
            "render_tactical_diagram",
            json!({
                "drill": {
                    "meta": {"title": "Rondo Setup"},
                    "elements": [{"id": "p1", "x": 10.0, "y": 10.0}]
                }
            }),
        ))
        .await;

    let payload = tool_payload(&response);
    let image_path = payload["image_path"].as_str().unwrap();
    assert!(std::path::Path::new(image_path).exists());
    assert_eq!(payload["title"], json!("Rondo Setup"));
}

#[tokio::test]
async fn test_tool_call_unknown_tool() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir);
    let response = server
        .handle_request(tool_call("bogus_tool", json!({})))
        .await;
    assert!(response.is_error());
    assert!(response.error.unwrap().message.contains("bogus_tool"));
}

#[tokio::test]
async fn test_tool_call_missing_required_parameter() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir);
    let response = server
        .handle_request(tool_call("fix_table_alignment", json!({})))
        .await;
    assert!(response.is_error());
    assert_eq!(response.error.unwrap().code, error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_tool_call_without_name() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir);
    let response = server
        .handle_request(request("tools/call", Some(json!({ "arguments": {} }))))
        .await;
    assert!(response.is_error());
    assert_eq!(response.error.unwrap().code, error_codes::INVALID_PARAMS);
}

#[test]
fn test_notifications_carry_no_id() {
    let notification = JsonRpcRequest::notification("notifications/initialized", None);
    assert!(notification.is_notification());
    let with_id = JsonRpcRequest::new("ping", None);
    assert!(!with_id.is_notification());
}
