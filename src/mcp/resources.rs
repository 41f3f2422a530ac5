// ABOUTME: Shared server resources constructed once at startup
// ABOUTME: Configuration and fonts, Arc-shared into every tool execution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Server Resources
//!
//! Everything the server shares across requests, constructed once in the
//! binary and passed by `Arc`. There is no lazily-initialized global
//! state anywhere in the server.

use crate::config::ServerConfig;
use crate::documents::FontBook;

/// Dependency container for the MCP server
#[derive(Debug)]
pub struct ServerResources {
    /// Environment-derived configuration
    pub config: ServerConfig,
    /// Fonts resolved at startup for PDF generation
    pub fonts: FontBook,
}

impl ServerResources {
    /// Bundle configuration and fonts
    #[must_use]
    pub const fn new(config: ServerConfig, fonts: FontBook) -> Self {
        Self { config, fonts }
    }
}
