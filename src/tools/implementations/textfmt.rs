// ABOUTME: Text formatting tools: table alignment, line wrapping, file and batch wrappers
// ABOUTME: Thin MCP adapters over the coachkit-core text-layout engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Text Formatting Tools
//!
//! MCP adapters over the `coachkit-core` engine. The in-memory tools
//! (`fix_table_alignment`, `wrap_long_lines`, `format_text`) take text
//! payloads; the file tools read and write documents on disk; the
//! directory tool runs the batch wrapper. When no `max_width` is given,
//! the server-configured default applies before the engine's own
//! widest-table heuristic.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::constants::tools::{
    FIX_TABLE_ALIGNMENT, FIX_TEXT_DIRECTORY, FIX_TEXT_FILE, FORMAT_TEXT, FORMAT_TEXT_FILE,
    WRAP_LONG_LINES,
};
use crate::errors::{AppError, AppResult};
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

use super::{optional_bool, optional_str, optional_usize, required_str};

fn width_arg(
    args: &Value,
    tool: &'static str,
    context: &ToolExecutionContext,
) -> AppResult<Option<usize>> {
    Ok(optional_usize(args, tool, "max_width")?
        .or(context.resources.config.default_max_width))
}

fn text_schema(with_width: bool) -> JsonSchema {
    let mut properties = HashMap::new();
    properties.insert(
        "text".to_owned(),
        PropertySchema::new("string", "The text content to process"),
    );
    if with_width {
        properties.insert(
            "max_width".to_owned(),
            PropertySchema::new(
                "integer",
                "Maximum line width. Defaults to the widest table in the text, \
                 or 120 with no tables",
            ),
        );
    }
    JsonSchema::object(properties, Some(vec!["text".to_owned()]))
}

fn file_schema(with_width: bool) -> JsonSchema {
    let mut properties = HashMap::new();
    properties.insert(
        "path".to_owned(),
        PropertySchema::new("string", "Path of the input text file"),
    );
    properties.insert(
        "output_path".to_owned(),
        PropertySchema::new(
            "string",
            "Optional output path. Defaults to overwriting in place, or a \
             suffix-qualified sibling when in_place is false",
        ),
    );
    properties.insert(
        "in_place".to_owned(),
        PropertySchema::new("boolean", "Overwrite the input file (default true)"),
    );
    if with_width {
        properties.insert(
            "max_width".to_owned(),
            PropertySchema::new(
                "integer",
                "Maximum line width for wrapping. Defaults to the widest table",
            ),
        );
    }
    JsonSchema::object(properties, Some(vec!["path".to_owned()]))
}

// ============================================================================
// In-memory text tools
// ============================================================================

/// Fix ASCII table alignment in a text payload
pub struct FixTableAlignmentTool;

#[async_trait]
impl McpTool for FixTableAlignmentTool {
    fn name(&self) -> &'static str {
        FIX_TABLE_ALIGNMENT
    }

    fn description(&self) -> &'static str {
        "Fix alignment issues in ASCII tables drawn with box-drawing characters. \
         Detects tables, recovers the column grid from border rows, and shifts \
         data-row separators back onto it. Damaged rows that cannot be fixed \
         are reported as warnings."
    }

    fn input_schema(&self) -> JsonSchema {
        text_schema(false)
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::TEXT_TRANSFORM
    }

    async fn execute(&self, args: Value, _context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let text = required_str(&args, FIX_TABLE_ALIGNMENT, "text")?;
        let outcome = coachkit_core::fix_alignment(text);
        Ok(ToolResult::ok(json!({
            "fixed_text": outcome.text,
            "fixes": outcome.fixes,
            "warnings": outcome.warnings,
        })))
    }
}

/// Wrap long non-table lines in a text payload
pub struct WrapLongLinesTool;

#[async_trait]
impl McpTool for WrapLongLinesTool {
    fn name(&self) -> &'static str {
        WRAP_LONG_LINES
    }

    fn description(&self) -> &'static str {
        "Wrap long non-table lines to fit a width budget, preserving indentation \
         and list-bullet prefixes. Table lines are never wrapped."
    }

    fn input_schema(&self) -> JsonSchema {
        text_schema(true)
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::TEXT_TRANSFORM
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let text = required_str(&args, WRAP_LONG_LINES, "text")?;
        let max_width = width_arg(&args, WRAP_LONG_LINES, context)?;
        let outcome = coachkit_core::wrap_long_lines(text, max_width);
        Ok(ToolResult::ok(json!({
            "wrapped_text": outcome.text,
            "changes": outcome.changes,
        })))
    }
}

/// Fix table alignment and wrap long lines in a text payload
pub struct FormatTextTool;

#[async_trait]
impl McpTool for FormatTextTool {
    fn name(&self) -> &'static str {
        FORMAT_TEXT
    }

    fn description(&self) -> &'static str {
        "Fix ASCII table alignment and then wrap long non-table lines. \
         Composition of fix_table_alignment and wrap_long_lines."
    }

    fn input_schema(&self) -> JsonSchema {
        text_schema(true)
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::TEXT_TRANSFORM
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let text = required_str(&args, FORMAT_TEXT, "text")?;
        let max_width = width_arg(&args, FORMAT_TEXT, context)?;
        let outcome = coachkit_core::format_text(text, max_width);
        Ok(ToolResult::ok(json!({
            "formatted_text": outcome.text,
            "fixes": outcome.fixes,
            "warnings": outcome.warnings,
            "wraps": outcome.wraps,
        })))
    }
}

// ============================================================================
// File-level tools
// ============================================================================

/// Fix ASCII table alignment in a text file on disk
pub struct FixTextFileTool;

#[async_trait]
impl McpTool for FixTextFileTool {
    fn name(&self) -> &'static str {
        FIX_TEXT_FILE
    }

    fn description(&self) -> &'static str {
        "Fix ASCII table alignment in a text file. Writes the result in place \
         (default) or to output_path; writes nothing when no fixes apply. \
         Returns a structured report with status, fixes, and warnings."
    }

    fn input_schema(&self) -> JsonSchema {
        file_schema(false)
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::TEXT_TRANSFORM
            | ToolCapabilities::READS_FILES
            | ToolCapabilities::WRITES_FILES
    }

    async fn execute(&self, args: Value, _context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let path = required_str(&args, FIX_TEXT_FILE, "path")?;
        let output_path = optional_str(&args, "output_path").map(Path::new);
        let in_place = optional_bool(&args, "in_place", true);

        let report = coachkit_core::fix_text_file(Path::new(path), output_path, in_place)?;
        ToolResult::from_serializable(&report).map_err(AppError::from)
    }
}

/// Fix alignment and wrap long lines in a text file on disk
pub struct FormatTextFileTool;

#[async_trait]
impl McpTool for FormatTextFileTool {
    fn name(&self) -> &'static str {
        FORMAT_TEXT_FILE
    }

    fn description(&self) -> &'static str {
        "Fix ASCII table alignment AND wrap long lines in a text file. Writes \
         the result in place (default) or to output_path; writes nothing when \
         no changes apply. Returns a structured report."
    }

    fn input_schema(&self) -> JsonSchema {
        file_schema(true)
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::TEXT_TRANSFORM
            | ToolCapabilities::READS_FILES
            | ToolCapabilities::WRITES_FILES
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let path = required_str(&args, FORMAT_TEXT_FILE, "path")?;
        let output_path = optional_str(&args, "output_path").map(Path::new);
        let in_place = optional_bool(&args, "in_place", true);
        let max_width = width_arg(&args, FORMAT_TEXT_FILE, context)?;

        let report =
            coachkit_core::format_text_file(Path::new(path), output_path, in_place, max_width)?;
        ToolResult::from_serializable(&report).map_err(AppError::from)
    }
}

/// Fix every matching text file in a directory
pub struct FixTextDirectoryTool;

#[async_trait]
impl McpTool for FixTextDirectoryTool {
    fn name(&self) -> &'static str {
        FIX_TEXT_DIRECTORY
    }

    fn description(&self) -> &'static str {
        "Fix ASCII table alignment in every file matching a glob pattern in a \
         directory (default *.txt). Failures on individual files are captured \
         per-file so sibling files still process. Returns one report per file."
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "directory".to_owned(),
            PropertySchema::new("string", "Directory containing text files"),
        );
        properties.insert(
            "pattern".to_owned(),
            PropertySchema::new("string", "Glob pattern for input files (default *.txt)"),
        );
        properties.insert(
            "in_place".to_owned(),
            PropertySchema::new("boolean", "Overwrite files with fixes (default true)"),
        );
        JsonSchema::object(properties, Some(vec!["directory".to_owned()]))
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::TEXT_TRANSFORM
            | ToolCapabilities::READS_FILES
            | ToolCapabilities::WRITES_FILES
    }

    async fn execute(&self, args: Value, _context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let directory = required_str(&args, FIX_TEXT_DIRECTORY, "directory")?;
        let pattern = optional_str(&args, "pattern").unwrap_or("*.txt");
        let in_place = optional_bool(&args, "in_place", true);

        let reports = coachkit_core::fix_all_text_files(Path::new(directory), pattern, in_place)?;
        Ok(ToolResult::ok(json!({ "results": reports })))
    }
}
