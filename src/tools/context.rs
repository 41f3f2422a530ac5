// ABOUTME: Execution context handed to every tool invocation
// ABOUTME: Carries the shared server resources without hidden globals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Tool Execution Context
//!
//! Everything a tool may need at execution time, passed explicitly. Tools
//! never reach for process-global state.

use std::sync::Arc;

use crate::mcp::resources::ServerResources;

/// Context for one tool execution
#[derive(Debug, Clone)]
pub struct ToolExecutionContext {
    /// Shared server resources (config, fonts, output layout)
    pub resources: Arc<ServerResources>,
}

impl ToolExecutionContext {
    /// Create a context over the shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }
}
