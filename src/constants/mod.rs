// ABOUTME: Centralized constants for protocol versions, tool names, and limits
// ABOUTME: Single source of truth so schemas, handlers, and tests never drift apart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Application constants.

/// MCP protocol constants
pub mod protocol {
    /// MCP protocol version implemented by this server
    pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

    /// Server name reported in the initialize response
    pub const SERVER_NAME: &str = "coachkit-mcp-server";

    /// Server version from the crate manifest
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Tool name constants, used by schemas, dispatch, and tests
pub mod tools {
    /// Render a tactical diagram to an SVG pitch image
    pub const RENDER_TACTICAL_DIAGRAM: &str = "render_tactical_diagram";
    /// Evaluate spatial/intensity metrics for a session plan
    pub const EVALUATE_SESSION_PLAN: &str = "evaluate_session_plan";
    /// Compile markdown/image sections into a PDF
    pub const COMPILE_TO_PDF: &str = "compile_to_pdf";
    /// Compile markdown/image sections into standalone HTML
    pub const COMPILE_TO_HTML: &str = "compile_to_html";
    /// Fix ASCII table alignment in a text payload
    pub const FIX_TABLE_ALIGNMENT: &str = "fix_table_alignment";
    /// Wrap long non-table lines in a text payload
    pub const WRAP_LONG_LINES: &str = "wrap_long_lines";
    /// Fix alignment and wrap long lines in a text payload
    pub const FORMAT_TEXT: &str = "format_text";
    /// Fix ASCII table alignment in a file on disk
    pub const FIX_TEXT_FILE: &str = "fix_text_file";
    /// Fix alignment and wrap long lines in a file on disk
    pub const FORMAT_TEXT_FILE: &str = "format_text_file";
    /// Fix every matching text file in a directory
    pub const FIX_TEXT_DIRECTORY: &str = "fix_text_directory";
    /// Convert a fixed-width text file to PDF
    pub const TEXT_FILE_TO_PDF: &str = "text_file_to_pdf";
}

/// Layout limits for document generation
pub mod limits {
    /// Longest title fragment carried into generated file names
    pub const MAX_TITLE_IN_FILENAME: usize = 30;

    /// Characters per line above which text-to-PDF switches to landscape
    pub const LANDSCAPE_THRESHOLD_CHARS: usize = 130;

    /// Default font size for text-to-PDF output (points)
    pub const DEFAULT_FONT_SIZE: f32 = 9.0;
    /// Smallest acceptable text-to-PDF font size (points)
    pub const MIN_FONT_SIZE: f32 = 5.0;
    /// Largest acceptable text-to-PDF font size (points)
    pub const MAX_FONT_SIZE: f32 = 12.0;
}
