// ABOUTME: MCP protocol implementation: schema, handlers, resources, stdio server
// ABOUTME: Serves the coaching toolset over line-delimited JSON-RPC
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Model Context Protocol
//!
//! The protocol shell: type-safe schema definitions, protocol handlers,
//! the shared resource container, and the stdio server loop.

pub mod protocol;
pub mod resources;
pub mod schema;
pub mod server;

pub use resources::ServerResources;
pub use server::McpServer;
