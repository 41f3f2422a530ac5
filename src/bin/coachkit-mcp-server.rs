// ABOUTME: MCP server binary serving the coaching toolset over stdio
// ABOUTME: Resolves configuration and fonts once at startup, then runs the serve loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # CoachKit MCP Server Binary
//!
//! Starts the stdio MCP server: configuration from the environment, font
//! discovery, tool registration, then the serve loop until stdin closes.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use coachkit_mcp_server::config::environment::ServerConfig;
use coachkit_mcp_server::documents::FontBook;
use coachkit_mcp_server::logging;
use coachkit_mcp_server::mcp::{McpServer, ServerResources};
use coachkit_mcp_server::tools::implementations::register_builtin_tools;
use coachkit_mcp_server::tools::ToolRegistry;

#[derive(Parser)]
#[command(name = "coachkit-mcp-server")]
#[command(about = "CoachKit - MCP toolset for soccer-coaching artifacts")]
struct Args {
    /// Override the output root directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Explicit monospace font file for PDF generation
    #[arg(long)]
    mono_font: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(output_dir) = args.output_dir {
        config.output = coachkit_mcp_server::config::OutputConfig::under_root(output_dir);
    }
    if let Some(mono_font) = args.mono_font {
        config.mono_font_path = Some(mono_font);
    }

    info!("Starting CoachKit MCP server");
    info!("{}", config.summary());

    let fonts = FontBook::discover(config.mono_font_path.as_deref());
    if !fonts.has_unicode_mono() {
        info!("running without an embedded Unicode monospace font");
    }

    let mut registry = ToolRegistry::new();
    register_builtin_tools(&mut registry);
    info!(tools = registry.len(), "tool registry populated");

    let resources = Arc::new(ServerResources::new(config, fonts));
    let server = McpServer::new(resources, registry);
    server.run_stdio().await?;
    Ok(())
}
