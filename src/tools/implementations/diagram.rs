// ABOUTME: Tactical diagram rendering tool
// ABOUTME: Validates a DrillDefinition and renders it to an SVG pitch image
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Diagram Tool
//!
//! `render_tactical_diagram` validates the drill payload at the boundary
//! and delegates drawing to the renderer.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::constants::tools::RENDER_TACTICAL_DIAGRAM;
use crate::errors::{AppError, AppResult};
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::models::DrillDefinition;
use crate::render;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

use super::{optional_str, required_value};

/// Render a soccer tactical diagram from a `DrillDefinition`
pub struct RenderTacticalDiagramTool;

#[async_trait]
impl McpTool for RenderTacticalDiagramTool {
    fn name(&self) -> &'static str {
        RENDER_TACTICAL_DIAGRAM
    }

    fn description(&self) -> &'static str {
        "Render a soccer tactical diagram from a DrillDefinition. Draws a pitch \
         with players, movement arrows, and zones as an SVG image. Returns the \
         path to the saved image."
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "drill".to_owned(),
            PropertySchema::new(
                "object",
                "DrillDefinition object with meta, elements, actions, zones",
            ),
        );
        properties.insert(
            "output_path".to_owned(),
            PropertySchema::new(
                "string",
                "Optional output file path. Defaults to the diagrams output directory",
            ),
        );
        JsonSchema::object(properties, Some(vec!["drill".to_owned()]))
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::RENDERS_ARTIFACTS | ToolCapabilities::WRITES_FILES
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let drill_value = required_value(&args, RENDER_TACTICAL_DIAGRAM, "drill")?;
        let drill: DrillDefinition = serde_json::from_value(drill_value.clone())
            .map_err(|e| AppError::invalid_input(format!("invalid drill definition: {e}")))?;

        let image_path = match optional_str(&args, "output_path") {
            Some(explicit) => {
                let path = Path::new(explicit);
                render::render_to_file(&drill, path)?;
                path.to_path_buf()
            }
            None => render::render(&drill, &context.resources.config.output.diagrams_dir)?,
        };

        Ok(ToolResult::ok(json!({
            "image_path": image_path.display().to_string(),
            "title": drill.meta.title,
        })))
    }
}
