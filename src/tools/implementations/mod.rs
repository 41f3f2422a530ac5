// ABOUTME: Built-in tool implementations and their registration
// ABOUTME: Shared argument-extraction helpers for JSON tool payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Built-in Tools
//!
//! - `diagram` - tactical diagram rendering
//! - `evaluation` - session-plan metrics
//! - `documents` - PDF/HTML compilation and text-to-PDF conversion
//! - `textfmt` - table alignment and line wrapping

pub mod diagram;
pub mod documents;
pub mod evaluation;
pub mod textfmt;

use std::sync::Arc;

use serde_json::Value;

use crate::errors::AppResult;
use crate::tools::errors::ToolError;
use crate::tools::registry::ToolRegistry;

/// Register every built-in tool
pub fn register_builtin_tools(registry: &mut ToolRegistry) {
    registry.register_with_category(Arc::new(diagram::RenderTacticalDiagramTool), "rendering");
    registry.register_with_category(Arc::new(evaluation::EvaluateSessionPlanTool), "analytics");
    registry.register_with_category(Arc::new(documents::CompileToPdfTool), "documents");
    registry.register_with_category(Arc::new(documents::CompileToHtmlTool), "documents");
    registry.register_with_category(Arc::new(documents::TextFileToPdfTool), "documents");
    registry.register_with_category(Arc::new(textfmt::FixTableAlignmentTool), "textfmt");
    registry.register_with_category(Arc::new(textfmt::WrapLongLinesTool), "textfmt");
    registry.register_with_category(Arc::new(textfmt::FormatTextTool), "textfmt");
    registry.register_with_category(Arc::new(textfmt::FixTextFileTool), "textfmt");
    registry.register_with_category(Arc::new(textfmt::FormatTextFileTool), "textfmt");
    registry.register_with_category(Arc::new(textfmt::FixTextDirectoryTool), "textfmt");
}

/// Required string argument
fn required_str<'a>(args: &'a Value, tool: &'static str, key: &'static str) -> AppResult<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ToolError::missing_parameter(tool, key).into())
}

/// Required argument of any JSON type
fn required_value<'a>(
    args: &'a Value,
    tool: &'static str,
    key: &'static str,
) -> AppResult<&'a Value> {
    match args.get(key) {
        Some(Value::Null) | None => Err(ToolError::missing_parameter(tool, key).into()),
        Some(value) => Ok(value),
    }
}

/// Optional string argument
fn optional_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str)
}

/// Optional boolean argument with a default
fn optional_bool(args: &Value, key: &str, default: bool) -> bool {
    args.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Optional positive integer argument
fn optional_usize(args: &Value, tool: &'static str, key: &'static str) -> AppResult<Option<usize>> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(|v| Some(v as usize))
            .ok_or_else(|| {
                ToolError::invalid_parameter(tool, key, "must be a positive integer").into()
            }),
    }
}
