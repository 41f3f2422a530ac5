// ABOUTME: Configuration module for the CoachKit MCP server
// ABOUTME: Environment-driven server configuration, resolved once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Server configuration.

pub mod environment;

pub use environment::{OutputConfig, ServerConfig};
