// ABOUTME: Defines the McpTool trait and ToolCapabilities for the pluggable tools architecture
// ABOUTME: Tools implement this trait to be registered and executed via the ToolRegistry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # MCP Tool Trait and Capabilities
//!
//! The core abstraction for MCP tools. All tools implement [`McpTool`],
//! which provides tool metadata (name, description, input schema),
//! capability flags for filtering, and async execution with context.

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::JsonSchema;

use super::context::ToolExecutionContext;
use super::result::ToolResult;

bitflags! {
    /// Capabilities that tools declare for filtering and discovery.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool transforms text payloads in memory
        const TEXT_TRANSFORM = 0b0000_0001;
        /// Tool reads files from disk
        const READS_FILES = 0b0000_0010;
        /// Tool writes files to disk
        const WRITES_FILES = 0b0000_0100;
        /// Tool renders visual artifacts (diagrams)
        const RENDERS_ARTIFACTS = 0b0000_1000;
        /// Tool computes metrics and recommendations
        const ANALYTICS = 0b0001_0000;
        /// Tool produces compiled documents (PDF/HTML)
        const DOCUMENTS = 0b0010_0000;
    }
}

impl ToolCapabilities {
    /// Check if the tool touches the filesystem at all
    #[must_use]
    pub const fn touches_files(self) -> bool {
        self.intersects(Self::READS_FILES.union(Self::WRITES_FILES))
    }

    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.contains(Self::TEXT_TRANSFORM) {
            parts.push("text_transform");
        }
        if self.contains(Self::READS_FILES) {
            parts.push("reads_files");
        }
        if self.contains(Self::WRITES_FILES) {
            parts.push("writes_files");
        }
        if self.contains(Self::RENDERS_ARTIFACTS) {
            parts.push("renders_artifacts");
        }
        if self.contains(Self::ANALYTICS) {
            parts.push("analytics");
        }
        if self.contains(Self::DOCUMENTS) {
            parts.push("documents");
        }
        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// The main trait that all MCP tools implement.
///
/// Tools are registered with the [`ToolRegistry`](super::registry::ToolRegistry)
/// and looked up by name at dispatch time.
///
/// # Design Notes
///
/// - Tools are `Send + Sync` for safe sharing across async tasks
/// - `name()` returns `&'static str` for zero-allocation lookup
/// - `execute()` is async so file-producing tools can stay off the
///   protocol reader
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique identifier for the tool (e.g. `fix_table_alignment`)
    fn name(&self) -> &'static str;

    /// Human-readable description for LLM consumption
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters, returned in tools/list
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags for filtering and logging
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute the tool with given arguments and context
    ///
    /// # Errors
    ///
    /// Returns `AppError` for validation failures or execution errors;
    /// the dispatch layer converts these into protocol error responses.
    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult>;
}
