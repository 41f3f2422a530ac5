// ABOUTME: Main library entry point for the CoachKit coaching toolset
// ABOUTME: Provides MCP tools for diagrams, session evaluation, documents, and table repair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # CoachKit MCP Server
//!
//! A Model Context Protocol (MCP) server for generating soccer-coaching
//! artifacts: tactical diagrams rendered onto a pitch image, session-plan
//! spatial/intensity evaluation, document compilation (Markdown/text to
//! PDF or HTML), and ASCII table realignment for hand-edited coaching
//! documents.
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **`coachkit-core`** (workspace crate): the table realignment and
//!   text-reflow engine, usable without the server
//! - **mcp**: protocol schema, handlers, and the stdio server loop
//! - **tools**: the pluggable tool engine and built-in tools
//! - **render**: SVG pitch diagram rendering
//! - **intelligence**: session-plan evaluation
//! - **documents**: PDF/HTML builders and text-to-PDF conversion
//!
//! ## Quick Start
//!
//! 1. Start the server with `coachkit-mcp-server`
//! 2. Connect from Claude or another MCP client over stdio
//! 3. Or run the formatting operations directly with `coachkit-cli`

pub mod config;
pub mod constants;
pub mod documents;
pub mod errors;
pub mod intelligence;
pub mod jsonrpc;
pub mod logging;
pub mod mcp;
pub mod models;
pub mod render;
pub mod tools;
