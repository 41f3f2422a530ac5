// ABOUTME: Document compilation tools: sections to PDF/HTML, text files to PDF
// ABOUTME: Validates section payloads into the tagged union before building
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Document Tools
//!
//! `compile_to_pdf`, `compile_to_html`, and `text_file_to_pdf`. Section
//! payloads are deserialized into [`Section`] at the boundary; malformed
//! sections are rejected before any document building starts.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::constants::tools::{COMPILE_TO_HTML, COMPILE_TO_PDF, TEXT_FILE_TO_PDF};
use crate::documents::{compile_html, compile_pdf, text_to_pdf};
use crate::errors::{AppError, AppResult};
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::models::Section;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

use super::{optional_str, required_str, required_value};

fn sections_schema(properties: &mut HashMap<String, PropertySchema>) {
    properties.insert(
        "title".to_owned(),
        PropertySchema::new("string", "Document title"),
    );
    properties.insert(
        "sections".to_owned(),
        PropertySchema::new(
            "array",
            "Ordered list of content sections; each is {type: markdown|image, \
             content, caption?}",
        ),
    );
    properties.insert(
        "output_path".to_owned(),
        PropertySchema::new(
            "string",
            "Optional output file path. Defaults to the configured output directory",
        ),
    );
}

fn parse_sections(args: &Value, tool: &'static str) -> AppResult<Vec<Section>> {
    let raw = required_value(args, tool, "sections")?;
    serde_json::from_value(raw.clone())
        .map_err(|e| AppError::invalid_input(format!("invalid sections: {e}")))
}

/// Compile a session plan with text and images into a PDF document
pub struct CompileToPdfTool;

#[async_trait]
impl McpTool for CompileToPdfTool {
    fn name(&self) -> &'static str {
        COMPILE_TO_PDF
    }

    fn description(&self) -> &'static str {
        "Compile a session plan with text and images into a PDF document. \
         Accepts markdown text sections and image paths. Markdown tables are \
         rendered as monospace grids that survive page breaks. Returns the \
         PDF file path."
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        sections_schema(&mut properties);
        JsonSchema::object(
            properties,
            Some(vec!["title".to_owned(), "sections".to_owned()]),
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::DOCUMENTS | ToolCapabilities::READS_FILES | ToolCapabilities::WRITES_FILES
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let title = required_str(&args, COMPILE_TO_PDF, "title")?;
        let sections = parse_sections(&args, COMPILE_TO_PDF)?;
        let output_path = optional_str(&args, "output_path").map(Path::new);

        let pdf_path = compile_pdf(
            title,
            &sections,
            output_path,
            &context.resources.config.output.pdfs_dir,
            &context.resources.fonts,
        )?;
        Ok(ToolResult::ok(json!({
            "pdf_path": pdf_path.display().to_string(),
        })))
    }
}

/// Compile a session plan with text and images into a standalone HTML document
pub struct CompileToHtmlTool;

#[async_trait]
impl McpTool for CompileToHtmlTool {
    fn name(&self) -> &'static str {
        COMPILE_TO_HTML
    }

    fn description(&self) -> &'static str {
        "Compile a session plan with text and images into a standalone HTML \
         document. Accepts markdown text sections and image paths. Images are \
         embedded as base64. Returns the HTML file path."
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        sections_schema(&mut properties);
        JsonSchema::object(
            properties,
            Some(vec!["title".to_owned(), "sections".to_owned()]),
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::DOCUMENTS | ToolCapabilities::READS_FILES | ToolCapabilities::WRITES_FILES
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let title = required_str(&args, COMPILE_TO_HTML, "title")?;
        let sections = parse_sections(&args, COMPILE_TO_HTML)?;
        let output_path = optional_str(&args, "output_path").map(Path::new);

        let html_path = compile_html(
            title,
            &sections,
            output_path,
            &context.resources.config.output.html_dir,
        )?;
        Ok(ToolResult::ok(json!({
            "html_path": html_path.display().to_string(),
        })))
    }
}

/// Convert a fixed-width text file to PDF with exact layout preservation
pub struct TextFileToPdfTool;

#[async_trait]
impl McpTool for TextFileToPdfTool {
    fn name(&self) -> &'static str {
        TEXT_FILE_TO_PDF
    }

    fn description(&self) -> &'static str {
        "Convert a fixed-width text file to PDF, preserving exact column \
         positions so box-drawing tables stay intact. Font size is fitted to \
         the longest line; wide documents switch to landscape. Existing \
         outputs are never overwritten. Returns the PDF file path."
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "path".to_owned(),
            PropertySchema::new("string", "Path of the input text file"),
        );
        properties.insert(
            "output_path".to_owned(),
            PropertySchema::new(
                "string",
                "Optional output path. Defaults to the input path with a .pdf extension",
            ),
        );
        JsonSchema::object(properties, Some(vec!["path".to_owned()]))
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::DOCUMENTS | ToolCapabilities::READS_FILES | ToolCapabilities::WRITES_FILES
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let path = required_str(&args, TEXT_FILE_TO_PDF, "path")?;
        let output_path = optional_str(&args, "output_path").map(Path::new);

        let pdf_path = text_to_pdf(Path::new(path), output_path, &context.resources.fonts)?;
        Ok(ToolResult::ok(json!({
            "pdf_path": pdf_path.display().to_string(),
        })))
    }
}
