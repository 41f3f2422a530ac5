// ABOUTME: Pluggable tool execution engine for the CoachKit MCP server
// ABOUTME: Trait, registry, context, result, and the built-in tool implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Tool Engine
//!
//! The shared tool execution engine: the [`McpTool`] trait, the
//! [`ToolRegistry`], and the built-in tool implementations.

pub mod context;
pub mod errors;
pub mod implementations;
pub mod registry;
pub mod result;
pub mod traits;

pub use context::ToolExecutionContext;
pub use errors::ToolError;
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use traits::{McpTool, ToolCapabilities};
